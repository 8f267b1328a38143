//! Bundled first-run content.
//!
//! Written into any storage slot that has no persisted value yet, so a
//! fresh browser profile gets a fully populated demonstration site. Dates
//! are fixed so the dataset is deterministic.

use chrono::{DateTime, TimeZone, Utc};

use crate::model::post::{BlogPost, PostStatus, slugify};
use crate::model::settings::{AbTestConfig, FormSettings, SeoSettings, SiteSettings, SocialLinks};
use crate::model::testimonial::Testimonial;

pub fn default_settings() -> SiteSettings {
    SiteSettings {
        site_title: "Acumen AI".to_string(),
        tagline: "AI Consulting for Small Business".to_string(),
        contact_phone: "+1-555-014-2980".to_string(),
        contact_email: "hello@acumen-ai.example".to_string(),
        office_address: "412 Commerce Street, Suite 210, Nashville, TN 37201".to_string(),
        business_hours: "Monday - Friday, 9am - 5pm CT".to_string(),
        social: SocialLinks {
            linkedin: "https://linkedin.com/company/acumen-ai".to_string(),
            twitter: "https://twitter.com/acumen_ai".to_string(),
            facebook: "https://facebook.com/acumenai".to_string(),
        },
        seo: SeoSettings {
            meta_description: "Acumen AI helps small businesses put practical AI to work: \
                               less busywork, lower costs, steadier growth."
                .to_string(),
            keywords: "AI consulting, small business AI, AI automation, AI strategy".to_string(),
        },
        form_settings: FormSettings {
            webhook_url: String::new(),
        },
        ab_test: AbTestConfig {
            hero_headline_a: "Put AI to Work in Your Business This Quarter".to_string(),
            hero_headline_b: "Practical AI for Businesses That Don't Have Time for Hype"
                .to_string(),
            cta_text_a: "Book a Free Consultation".to_string(),
            cta_text_b: "Get Your Free AI Roadmap".to_string(),
        },
    }
}

pub fn default_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "1".to_string(),
            name: "Priya Raman".to_string(),
            title: "Owner, Raman Home Goods".to_string(),
            company: "Raman Home Goods".to_string(),
            quote: "Acumen automated our order inquiries end to end. The same two people \
                    now handle three times the volume without staying late."
                .to_string(),
            result_badge: "3x Inquiry Capacity".to_string(),
            photo_url: "https://picsum.photos/seed/client1/200/200".to_string(),
            active: true,
        },
        Testimonial {
            id: "2".to_string(),
            name: "Marcus Webb".to_string(),
            title: "Founder, Webb Freight".to_string(),
            company: "Webb Freight".to_string(),
            quote: "I expected a long IT project. Instead we had scheduling assistants \
                    running in three weeks and got twelve hours a week back."
                .to_string(),
            result_badge: "12 Hours Saved Weekly".to_string(),
            photo_url: "https://picsum.photos/seed/client2/200/200".to_string(),
            active: true,
        },
        Testimonial {
            id: "3".to_string(),
            name: "Elena Duarte".to_string(),
            title: "CEO, Duarte Accounting".to_string(),
            company: "Duarte Accounting".to_string(),
            quote: "The engagement paid for itself inside two months. Clients notice the \
                    faster turnaround and our costs went down, not up."
                .to_string(),
            result_badge: "ROI in 60 Days".to_string(),
            photo_url: "https://picsum.photos/seed/client3/200/200".to_string(),
            active: true,
        },
    ]
}

pub fn default_posts() -> Vec<BlogPost> {
    let drafts = [
        (
            "1",
            "How Five-Person Teams Compete With Enterprise AI Budgets",
            "Strategy",
            "You don't need a data science department. These are the off-the-shelf \
             tools our smallest clients use to punch above their weight.",
            "Dana Kessler",
            date(2025, 5, 26),
            PostStatus::Published,
            6,
        ),
        (
            "2",
            "Automating Customer Email Without Losing the Human Touch",
            "Customer Service",
            "Where drafting assistants help, where they hurt, and the handoff rules \
             that keep your regulars from noticing a robot.",
            "Tom Iwu",
            date(2025, 6, 9),
            PostStatus::Published,
            5,
        ),
        (
            "3",
            "What an AI Readiness Audit Actually Looks At",
            "Implementation",
            "A walk through the checklist we run in week one: data hygiene, process \
             mapping, and the one question most owners can't answer.",
            "Dana Kessler",
            date(2025, 6, 23),
            PostStatus::Published,
            7,
        ),
        (
            "4",
            "The Hidden Cost of Waiting Another Year on AI",
            "Strategy",
            "Opportunity cost compounds quietly. We put numbers on what delaying \
             adoption means for a typical service business.",
            "Marisol Vega",
            date(2025, 7, 7),
            PostStatus::Published,
            5,
        ),
        (
            "5",
            "Choosing Your First Automation Project: A Scorecard",
            "Implementation",
            "Not every process is worth automating first. Score candidates on volume, \
             variance and pain before you commit a dime.",
            "Tom Iwu",
            date(2025, 7, 21),
            PostStatus::Draft,
            8,
        ),
    ];

    drafts
        .into_iter()
        .map(
            |(id, title, category, excerpt, author, published_date, status, read_time)| BlogPost {
                id: id.to_string(),
                title: title.to_string(),
                slug: slugify(title),
                category: category.to_string(),
                featured_image_url: format!("https://picsum.photos/seed/post{id}/1200/630"),
                excerpt: excerpt.to_string(),
                content: format!("<p>{excerpt}</p><p>Full article content coming soon.</p>"),
                author: author.to_string(),
                published_date,
                status,
                read_time,
            },
        )
        .collect()
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0)
        .single()
        .expect("valid seed date")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_post_slugs_match_their_titles() {
        for post in default_posts() {
            assert_eq!(post.slug, slugify(&post.title));
            assert!(!post.slug.is_empty());
        }
    }

    #[test]
    fn seed_ids_are_unique() {
        let mut ids: Vec<String> = default_posts().into_iter().map(|p| p.id).collect();
        ids.extend(default_testimonials().into_iter().map(|t| t.id));
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn persisted_layout_uses_camel_case_keys() {
        let json = serde_json::to_value(default_settings()).unwrap();
        assert!(json.get("siteTitle").is_some());
        assert!(json.get("formSettings").and_then(|f| f.get("webhookUrl")).is_some());
        assert!(json.get("abTest").and_then(|a| a.get("heroHeadlineA")).is_some());

        let json = serde_json::to_value(default_posts()).unwrap();
        let first = &json[0];
        assert!(first.get("featuredImageUrl").is_some());
        assert!(first.get("publishedDate").is_some());
        assert!(first.get("readTime").is_some());
        assert_eq!(first["status"], "Published");
    }
}
