//! Share-link construction for service inquiries.
//!
//! Turns an inquiry into a single human-readable message and a set of
//! platform deep links with the message pre-filled. Everything here is
//! pure: the same inquiry and destinations produce byte-identical output.

use std::collections::BTreeMap;

use crate::domain::Inquiry;

/// Fixed last line of every composed message.
const SIGNATURE: &str = "أُرسل عبر موقع RealHelper";

/// Shown alongside the raw text for platforms without a share URL.
const COPY_MANUALLY_NOTE: &str = "لا يوفر تيك توك رابط مشاركة مباشر، انسخ النص والصقه هناك";

/// The platforms an inquiry can be shared to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Platform {
    Whatsapp,
    Telegram,
    Twitter,
    Tiktok,
}

impl Platform {
    /// Recognise a destination tag. Unknown tags map to `None` and are
    /// silently dropped by the builder.
    fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "whatsapp" => Some(Self::Whatsapp),
            "telegram" => Some(Self::Telegram),
            "twitter" | "x" => Some(Self::Twitter),
            "tiktok" => Some(Self::Tiktok),
            _ => None,
        }
    }

    /// The key the landing page looks up in the `links` map.
    fn key(self) -> &'static str {
        match self {
            Self::Whatsapp => "whatsapp",
            Self::Telegram => "telegram",
            Self::Twitter => "twitter",
            Self::Tiktok => "tiktok",
        }
    }
}

/// A share target: a deep link with the message pre-filled, or the raw
/// text to copy manually where the platform has no share URL.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum ShareLink {
    Url(String),
    Manual { note: String, text: String },
}

/// Compose the share message: one line per present field, in fixed order,
/// closed by the signature line. Absent and blank fields leave no trace.
pub fn compose_message(requester: &str, inquiry: &Inquiry) -> String {
    let mut lines = vec![format!("طلب خدمة من: {requester}")];

    let labeled = [
        ("الميزانية", &inquiry.budget),
        ("التوقيت", &inquiry.timing),
        ("الموقع", &inquiry.location),
        ("التفاصيل", &inquiry.details),
        ("مواصفات مرغوبة", &inquiry.desired_details),
        ("مواصفات غير مرغوبة", &inquiry.undesired_details),
    ];
    for (label, value) in labeled {
        if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
            lines.push(format!("{label}: {value}"));
        }
    }

    lines.push(SIGNATURE.to_string());
    lines.join("\n")
}

/// Build the per-platform share links for the requested destinations.
///
/// The message is composed once and percent-encoded once; unrecognised
/// destination tags produce no entry and no error.
pub fn build_share_links(
    requester: &str,
    inquiry: &Inquiry,
    destinations: &[String],
) -> BTreeMap<&'static str, ShareLink> {
    let message = compose_message(requester, inquiry);
    let encoded = urlencoding::encode(&message);

    let mut links = BTreeMap::new();
    for platform in destinations.iter().filter_map(|tag| Platform::from_tag(tag)) {
        let link = match platform {
            Platform::Whatsapp => ShareLink::Url(format!("https://wa.me/?text={encoded}")),
            Platform::Telegram => {
                ShareLink::Url(format!("https://t.me/share/url?url=&text={encoded}"))
            }
            Platform::Twitter => {
                ShareLink::Url(format!("https://twitter.com/intent/tweet?text={encoded}"))
            }
            Platform::Tiktok => ShareLink::Manual {
                note: COPY_MANUALLY_NOTE.to_string(),
                text: message.clone(),
            },
        };
        links.insert(platform.key(), link);
    }

    links
}
