//! Integration tests for the ashbal-site crate.
//!
//! These tests cover:
//! - The contact submission timeline under paused time
//! - Cancellation of submissions on reset, resubmit and drop
//! - Page models following language switches made through the selector
//! - Property checks on selector input

use ashbal_common::test_utils::init_test_logging;
use ashbal_common::{Direction, Language};
use ashbal_config::{Config, ContactConfig};
use ashbal_i18n::DocumentRoot;
use ashbal_site::*;
use proptest::prelude::*;
use std::time::Duration;

fn site(language: Language) -> (Site, DocumentRoot) {
    let root = DocumentRoot::new();
    let site = Site::new(Config::default(), Some(language), root.clone()).unwrap();
    (site, root)
}

fn fill(form: &ContactForm) {
    form.set_name("Youssef");
    form.set_email("youssef@example.com");
    form.set_message("Bonjour, je voudrais inscrire mon fils.");
}

#[cfg(test)]
mod contact_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_status_sequence_is_observed() {
        init_test_logging();
        let mut form = ContactForm::default();
        fill(&form);
        let mut rx = form.subscribe();

        form.submit().unwrap();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), SubmissionStatus::Submitting);

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), SubmissionStatus::Success);
        assert_eq!(form.fields(), ContactFields::default());

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), SubmissionStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_configured_timings() {
        let config = ContactConfig {
            submit_delay_ms: 50,
            success_display_ms: 100,
        };
        let mut form = ContactForm::new(ContactTimings::from(&config));
        fill(&form);

        form.submit().unwrap();
        tokio::time::sleep(Duration::from_millis(51)).await;
        assert_eq!(form.status(), SubmissionStatus::Success);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_cancels_pending_submission() {
        let mut form = ContactForm::default();
        fill(&form);
        form.submit().unwrap();

        tokio::time::sleep(Duration::from_millis(500)).await;
        form.reset();
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(form.in_flight().is_none());

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_during_success_keeps_idle() {
        let mut form = ContactForm::default();
        fill(&form);
        form.submit().unwrap();

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(form.status(), SubmissionStatus::Success);

        form.reset();
        fill(&form);
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.fields().name, "Youssef");
    }

    #[tokio::test(start_paused = true)]
    async fn test_resubmit_replaces_previous_submission() {
        let mut form = ContactForm::default();
        fill(&form);
        let first = form.submit().unwrap();

        tokio::time::sleep(Duration::from_millis(600)).await;
        let second = form.submit().unwrap();
        assert_ne!(first, second);
        assert_eq!(form.in_flight().map(SubmissionHandle::id), Some(second));

        // The first submission would have completed here
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(form.status(), SubmissionStatus::Submitting);

        tokio::time::sleep(Duration::from_millis(501)).await;
        assert_eq!(form.status(), SubmissionStatus::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_site_cancels_submission() {
        let (mut site, _root) = site(Language::Fr);
        fill(site.contact());
        let mut rx = site.contact().subscribe();
        site.contact_mut().submit().unwrap();
        rx.borrow_and_update();

        drop(site);
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(!rx.has_changed().unwrap_or(false));
    }

    #[tokio::test]
    async fn test_invalid_email_rejected() {
        let mut form = ContactForm::default();
        fill(&form);
        form.set_email("youssef.example.com");

        let err = form.submit().unwrap_err();
        assert!(matches!(err, SiteError::Validation { field: "email", .. }));
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.fields().email, "youssef.example.com");
    }
}

#[cfg(test)]
mod page_tests {
    use super::*;

    fn fixed_options() -> PageOptions {
        PageOptions {
            year: 2025,
            social_url: ashbal_config::DEFAULT_SOCIAL_URL.to_string(),
        }
    }

    #[test]
    fn test_selector_switch_updates_page_and_document() {
        let (site, root) = site(Language::En);
        let english = site.page_with(&fixed_options());
        assert_eq!(english.dir, Direction::Ltr);
        assert_eq!(root.lang(), Language::En);

        site.selector().select("ar").unwrap();
        let arabic = site.page_with(&fixed_options());
        assert_eq!(arabic.dir, Direction::Rtl);
        assert_eq!(arabic.selector.selected, "ar");
        assert_eq!(root.dir(), Direction::Rtl);
        assert_eq!(root.lang(), Language::Ar);
        assert_ne!(english.header.title, arabic.header.title);

        site.selector().select("en").unwrap();
        assert_eq!(site.page_with(&fixed_options()), english);
        assert_eq!(root.dir(), Direction::Ltr);
    }

    #[test]
    fn test_page_json_shape() {
        let (site, _root) = site(Language::Ar);
        let value = serde_json::to_value(site.page_with(&fixed_options())).unwrap();

        assert_eq!(value["lang"], "ar");
        assert_eq!(value["dir"], "rtl");
        assert_eq!(value["selector"]["options"].as_array().map(Vec::len), Some(3));
        assert!(value["footer"]["copyright"].as_str().unwrap().ends_with("2025"));
    }

    #[test]
    fn test_every_language_renders() {
        let (site, root) = site(Language::En);
        for language in Language::ALL {
            site.selector().select(language.code()).unwrap();
            let page = site.page_with(&fixed_options());
            assert_eq!(page.lang, language);
            assert_eq!(page.dir, language.direction());
            assert_eq!(root.dir(), language.direction());
        }
    }
}

proptest! {
    #[test]
    fn test_unsupported_codes_keep_language(code in "[a-z]{1,5}") {
        prop_assume!(Language::from_code(&code).is_none());
        let (site, root) = site(Language::Fr);
        prop_assert!(site.selector().select(&code).is_err());
        prop_assert_eq!(site.selector().selected(), Language::Fr);
        prop_assert_eq!(root.lang(), Language::Fr);
    }
}
