//! Seller identity printed on every invoice.

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult};

/// An image the renderer should place on the invoice (e.g. a UPI payment QR code).
///
/// The assembler only records the asset and where it belongs; loading and
/// embedding the image is the renderer's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAsset {
    /// Path or URL understood by the rendering backend.
    pub source: String,
    /// Image format hint, e.g. `"WEBP"`.
    pub format: String,
    /// Placement box in page units: x, y, width, height.
    pub placement: [f32; 4],
}

/// Offset of India Standard Time from UTC, in minutes.
pub const IST_OFFSET_MINUTES: i32 = 5 * 60 + 30;

/// Shop identity and payment details.
///
/// Deserialization runs the same checks as [`SellerProfile::from_json`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SellerProfileRecord")]
pub struct SellerProfile {
    pub name: String,
    pub address_lines: Vec<String>,
    pub phones: Vec<String>,
    pub upi_id: Option<String>,
    pub payment_qr: Option<ImageAsset>,
    /// Shop's local time zone as minutes east of UTC; invoice dates are printed
    /// in it.
    pub utc_offset_minutes: i32,
}

impl SellerProfile {
    /// Load a profile from a JSON document.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::config(format!("seller profile: {e}")))
    }

    fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::config("name cannot be empty"));
        }
        let offset = self.utc_offset_minutes.checked_mul(60).and_then(FixedOffset::east_opt);
        if offset.is_none() {
            return Err(DomainError::config("utc_offset_minutes must be within ±24h"));
        }
        Ok(())
    }

    /// `"Phone no.: a & b"`, or `None` when no phone is configured.
    pub fn phone_line(&self) -> Option<String> {
        if self.phones.is_empty() {
            return None;
        }
        Some(format!("Phone no.: {}", self.phones.join(" & ")))
    }

    /// The shop's local offset; an out-of-range value falls back to UTC.
    pub fn timezone(&self) -> FixedOffset {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }
}

fn default_utc_offset() -> i32 {
    IST_OFFSET_MINUTES
}

/// Wire shape of a [`SellerProfile`].
#[derive(Debug, Clone, Deserialize)]
struct SellerProfileRecord {
    name: String,
    #[serde(default)]
    address_lines: Vec<String>,
    #[serde(default)]
    phones: Vec<String>,
    #[serde(default)]
    upi_id: Option<String>,
    #[serde(default)]
    payment_qr: Option<ImageAsset>,
    #[serde(default = "default_utc_offset")]
    utc_offset_minutes: i32,
}

impl TryFrom<SellerProfileRecord> for SellerProfile {
    type Error = DomainError;

    fn try_from(r: SellerProfileRecord) -> Result<Self, Self::Error> {
        let profile = Self {
            name: r.name,
            address_lines: r.address_lines,
            phones: r.phones,
            upi_id: r.upi_id,
            payment_qr: r.payment_qr,
            utc_offset_minutes: r.utc_offset_minutes,
        };
        profile.validate()?;
        Ok(profile)
    }
}

impl Default for SellerProfile {
    fn default() -> Self {
        Self {
            name: "RETRO CRACKERS".to_string(),
            address_lines: vec![
                "Sankarankovil Main Road,".to_string(),
                "Vembakottai, Sivakasi - 626123".to_string(),
            ],
            phones: vec!["+919597413148".to_string(), "+919952555514".to_string()],
            upi_id: Some("muthukumarm380@oksbi".to_string()),
            payment_qr: Some(ImageAsset {
                source: "/assets/qr.webp".to_string(),
                format: "WEBP".to_string(),
                placement: [150.0, 50.0, 40.0, 40.0],
            }),
            utc_offset_minutes: IST_OFFSET_MINUTES,
        }
    }
}
