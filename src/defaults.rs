//! Hardcoded placeholder records.
//!
//! Public pages fall back to these when a live query fails or returns an
//! empty list, so the site never renders a blank section.

use crate::domain::faq::FaqItem;
use crate::domain::project::Project;
use crate::domain::service_item::ServiceItem;
use crate::domain::testimonial::Testimonial;

#[must_use]
pub fn fallback_projects() -> Vec<Project> {
    vec![
        Project {
            id: 0,
            title: "Relaunch for a craft brewery".to_string(),
            summary: "Brand refresh, new storefront and a CMS the team actually uses.".to_string(),
            description: "Full redesign from logo to checkout.".to_string(),
            active: true,
            ..Project::default()
        },
        Project {
            id: 0,
            title: "Booking platform for a physiotherapy practice".to_string(),
            summary: "Online scheduling with reminders, cutting phone traffic in half."
                .to_string(),
            description: "Scheduling, reminders and patient intake forms.".to_string(),
            active: true,
            ..Project::default()
        },
    ]
}

#[must_use]
pub fn fallback_services() -> Vec<ServiceItem> {
    vec![
        ServiceItem {
            id: 0,
            title: "Web design".to_string(),
            summary: "Fast, accessible websites built to convert.".to_string(),
            description: "Design systems, prototypes and production builds.".to_string(),
            active: true,
            ..ServiceItem::default()
        },
        ServiceItem {
            id: 0,
            title: "Branding".to_string(),
            summary: "Identity work from naming to guidelines.".to_string(),
            description: "Logos, typography and brand voice.".to_string(),
            active: true,
            ..ServiceItem::default()
        },
        ServiceItem {
            id: 0,
            title: "SEO & content".to_string(),
            summary: "Technical SEO audits and content that ranks.".to_string(),
            description: "Audits, keyword strategy and editorial support.".to_string(),
            active: true,
            ..ServiceItem::default()
        },
    ]
}

#[must_use]
pub fn fallback_testimonials() -> Vec<Testimonial> {
    vec![Testimonial {
        id: 0,
        author: "M. Weber".to_string(),
        company: Some("Weber & Söhne".to_string()),
        quote: "Professional, fast and a pleasure to work with.".to_string(),
        rating: 5,
        active: true,
        ..Testimonial::default()
    }]
}

#[must_use]
pub fn fallback_faq() -> Vec<FaqItem> {
    vec![
        FaqItem {
            id: 0,
            question: "How long does a typical project take?".to_string(),
            answer: "Most sites launch within six to ten weeks.".to_string(),
            active: true,
            sort_order: 0,
        },
        FaqItem {
            id: 0,
            question: "Do you offer maintenance?".to_string(),
            answer: "Yes, we offer monthly care plans after launch.".to_string(),
            active: true,
            sort_order: 1,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallbacks_are_never_empty() {
        assert!(!fallback_projects().is_empty());
        assert!(!fallback_services().is_empty());
        assert!(!fallback_testimonials().is_empty());
        assert!(!fallback_faq().is_empty());
    }

    #[test]
    fn fallbacks_are_active() {
        assert!(fallback_projects().iter().all(|p| p.active));
        assert!(fallback_services().iter().all(|s| s.active));
    }
}
