use serde::{Deserialize, Serialize};

/// Site-wide configuration edited as a single record from the admin panel.
///
/// Saves replace the whole record; there is no field-level merge. Every
/// field may be empty. Serialized with camelCase keys, which is also the
/// shape persisted under the `siteSettings` storage entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub site_title: String,
    pub tagline: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub office_address: String,
    pub business_hours: String,
    pub social: SocialLinks,
    pub seo: SeoSettings,
    pub form_settings: FormSettings,
    pub ab_test: AbTestConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    pub linkedin: String,
    pub twitter: String,
    pub facebook: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoSettings {
    pub meta_description: String,
    pub keywords: String,
}

/// Delivery target for contact-form submissions. An empty URL means the
/// form is not wired up yet and submissions are rejected client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSettings {
    pub webhook_url: String,
}

/// Two-variant copy test for the home page hero. Which variant a visitor
/// sees is decided once per browser and persisted by the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbTestConfig {
    pub hero_headline_a: String,
    pub hero_headline_b: String,
    pub cta_text_a: String,
    pub cta_text_b: String,
}

/// Visitor-facing copy variant for the hero A/B test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbVariant {
    A,
    B,
}

impl AbVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            AbVariant::A => "A",
            AbVariant::B => "B",
        }
    }

    pub fn from_str(value: &str) -> Option<AbVariant> {
        match value {
            "A" => Some(AbVariant::A),
            "B" => Some(AbVariant::B),
            _ => None,
        }
    }

    pub fn headline<'a>(&self, config: &'a AbTestConfig) -> &'a str {
        match self {
            AbVariant::A => &config.hero_headline_a,
            AbVariant::B => &config.hero_headline_b,
        }
    }

    pub fn cta_text<'a>(&self, config: &'a AbTestConfig) -> &'a str {
        match self {
            AbVariant::A => &config.cta_text_a,
            AbVariant::B => &config.cta_text_b,
        }
    }
}
