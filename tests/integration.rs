//! Integration tests for resurtech-site.
//!
//! These tests exercise the public API from outside the crate, verifying that
//! the widgets, the app event loop, the forms and the site config work
//! together the way the home page uses them.

use std::time::Duration;

use pretty_assertions::assert_eq;
use tokio::time::Instant;

use resurtech_site::app::App;
use resurtech_site::config::SiteConfig;
use resurtech_site::event::TaskSlot;
use resurtech_site::forms::{Form, FormKind, Notifier, Toaster, Variant, MISSING_FIELDS_TITLE};
use resurtech_site::home::HomePage;
use resurtech_site::testing::{render_to_string, snapshots_to_string, Pilot};
use resurtech_site::widgets::*;
use resurtech_site::Error;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn carousel_of(items: &str, visible: usize) -> Carousel<char> {
    Carousel::new(
        items.chars().collect(),
        CarouselConfig::new().with_visible_slides(visible),
    )
    .unwrap()
}

fn position(pilot: &Pilot, id: resurtech_site::widget::WidgetId) -> usize {
    pilot
        .app()
        .widget::<Carousel<char>>(id)
        .map(Carousel::position)
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Carousel: wrap, settle, clone jump
// ---------------------------------------------------------------------------

#[test]
fn test_wrap_invariant_after_every_settle() {
    for n in 1..=4 {
        let items: String = "abcd".chars().take(n).collect();
        let mut carousel = carousel_of(&items, 1);
        for _ in 0..(3 * n + 2) {
            carousel.advance();
            carousel.on_transition_settled();
            carousel.finish_jump();
            assert!((1..=n).contains(&carousel.position()), "n = {n}");
            assert!(carousel.transition_enabled());
        }
    }
}

#[test]
fn test_wrap_invariant_backwards() {
    let mut carousel = carousel_of("abc", 1);
    for _ in 0..7 {
        carousel.retreat();
        carousel.on_transition_settled();
        carousel.finish_jump();
        assert!((1..=3).contains(&carousel.position()));
    }
}

#[test]
fn test_five_item_scenario() {
    let mut carousel = carousel_of("abcde", 3);
    assert_eq!(carousel.position(), 1);

    let positions: Vec<usize> = (0..5)
        .map(|_| {
            assert!(carousel.advance());
            carousel.position()
        })
        .collect();
    assert_eq!(positions, vec![2, 3, 4, 5, 6]);

    assert_eq!(
        carousel.on_transition_settled(),
        Settle::Jumped { from: 6, to: 1 }
    );
    assert_eq!(carousel.position(), 1);
    assert!(!carousel.transition_enabled());
    assert_eq!(carousel.current_item(), &'a');
}

#[test]
fn test_idempotent_settle_on_real_slide() {
    let mut carousel = carousel_of("abc", 1);
    carousel.advance();
    assert_eq!(carousel.on_transition_settled(), Settle::Idle);

    let before = (
        carousel.position(),
        carousel.transition_enabled(),
        carousel.phase(),
    );
    for _ in 0..3 {
        assert_eq!(carousel.on_transition_settled(), Settle::Idle);
        assert_eq!(
            (
                carousel.position(),
                carousel.transition_enabled(),
                carousel.phase()
            ),
            before
        );
    }
}

#[tokio::test(start_paused = true)]
async fn test_clone_jump_is_never_animated() {
    let mut pilot = Pilot::new();
    let id = pilot.mount(carousel_of("abc", 1));
    pilot.snapshots();

    pilot.click_previous(id);
    pilot.advance(ms(600)).await;

    insta::assert_snapshot!(snapshots_to_string(&pilot.snapshots()), @r"
    == Carousel
    slide 3/3 @0
    width: 500.0000%; transform: translateX(-0.0000%); transition: transform 0.5s ease
    | c
    == Carousel
    slide 3/3 @3
    width: 500.0000%; transform: translateX(-300.0000%); transition: none
    | c
    == Carousel
    slide 3/3 @3
    width: 500.0000%; transform: translateX(-300.0000%); transition: transform 0.5s ease
    | c
    ");
}

#[tokio::test(start_paused = true)]
async fn test_five_clicks_then_settle_jumps_home() {
    let mut pilot = Pilot::new();
    let id = pilot.mount(carousel_of("abcde", 3));

    for _ in 0..5 {
        pilot.click_next(id);
    }
    // Already on the trailing copy: a sixth click waits for the settle.
    pilot.click_next(id);
    assert_eq!(position(&pilot, id), 6);

    pilot.advance(ms(600)).await;
    assert_eq!(position(&pilot, id), 1);
    let carousel = pilot.app().widget::<Carousel<char>>(id).unwrap();
    assert!(carousel.transition_enabled());
    assert_eq!(carousel.phase(), CarouselPhase::Settled);
}

#[tokio::test(start_paused = true)]
async fn test_autoplay_restarts_on_manual_move() {
    let mut pilot = Pilot::new();
    let id = pilot.mount(carousel_of("abcde", 3));

    pilot.advance(ms(5100)).await;
    assert_eq!(position(&pilot, id), 2);

    pilot.advance(ms(1900)).await;
    pilot.click_next(id);
    assert_eq!(position(&pilot, id), 3);

    // The click pushed the next automatic advance to 12s.
    pilot.advance(ms(4000)).await;
    assert_eq!(position(&pilot, id), 3);
    pilot.advance(ms(1100)).await;
    assert_eq!(position(&pilot, id), 4);
}

#[tokio::test(start_paused = true)]
async fn test_autoplay_loops_forever() {
    let mut pilot = Pilot::new();
    let id = pilot.mount(carousel_of("ab", 1));
    // Sample between ticks, never on one.
    pilot.advance(ms(100)).await;

    let mut seen = Vec::new();
    for _ in 0..5 {
        pilot.advance(ms(5000)).await;
        let carousel = pilot.app().widget::<Carousel<char>>(id).unwrap();
        seen.push(*carousel.current_item());
    }
    // The clone jump at 10.5s restarts the interval, so the third sample
    // still shows the wrapped first slide.
    assert_eq!(seen, vec!['b', 'a', 'a', 'b', 'a']);
    assert!((1..=2).contains(&position(&pilot, id)));
}

// ---------------------------------------------------------------------------
// Counter
// ---------------------------------------------------------------------------

#[test]
fn test_counter_monotonic_for_shuffled_frames() {
    let mut counter = Counter::new(CounterConfig::new(120.0).with_suffix("+")).unwrap();
    counter.on_visibility_changed(true);

    let t0 = Instant::now();
    let offsets = [0, 300, 150, 900, 899, 1500, 1200, 1999, 2500, 1000];
    let mut last = 0.0;
    for offset in offsets {
        counter.on_frame(t0 + ms(offset));
        assert!(counter.displayed() >= last, "went backwards at {offset}ms");
        last = counter.displayed();
    }
    assert_eq!(counter.displayed(), 120.0);
    assert_eq!(render_to_string(&counter), "120+");
}

#[tokio::test(start_paused = true)]
async fn test_counter_views_never_decrease() {
    let mut pilot = Pilot::new();
    let id = pilot.mount(Counter::new(CounterConfig::new(40.0).with_suffix("+")).unwrap());
    pilot.scroll_into_view(id);
    pilot.advance(ms(2500)).await;

    let values: Vec<i64> = pilot
        .views_of(id)
        .iter()
        .map(|v| v.trim_end_matches('+').parse().unwrap())
        .collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(values.last(), Some(&40));
    assert!(values.len() > 100);
}

#[tokio::test(start_paused = true)]
async fn test_counter_triggers_once() {
    let mut pilot = Pilot::new();
    let id = pilot.mount(Counter::new(CounterConfig::new(10.0)).unwrap());

    pilot.scroll_into_view(id);
    pilot.advance(ms(500)).await;
    let halfway = pilot.view(id);

    pilot.scroll_out_of_view(id);
    pilot.scroll_into_view(id);
    let counter = pilot.app().widget::<Counter>(id).unwrap();
    assert!(matches!(
        counter.phase(),
        CounterPhase::Animating {
            started_at: Some(_)
        }
    ));
    assert_eq!(pilot.view(id), halfway);

    pilot.advance(ms(2000)).await;
    assert_eq!(pilot.view(id).as_deref(), Some("10"));

    // Done is final.
    pilot.scroll_into_view(id);
    assert!(!pilot.app().has_task(id, TaskSlot::Frames));
}

#[test]
fn test_one_decimal_scenario() {
    let mut counter =
        Counter::new(CounterConfig::new(2.1).with_decimals(1).with_duration(ms(2000))).unwrap();
    assert_eq!(counter.formatted(), "0.0");

    counter.on_visibility_changed(true);
    let t0 = Instant::now();
    assert_eq!(counter.on_frame(t0), FrameOutcome::Continue);
    assert_eq!(counter.formatted(), "0.0");
    assert_eq!(counter.on_frame(t0 + ms(2000)), FrameOutcome::Finished);
    assert_eq!(counter.formatted(), "2.1");
}

#[tokio::test(start_paused = true)]
async fn test_unmount_mid_animation_stops_frames() {
    let mut pilot = Pilot::new();
    let id = pilot.mount(Counter::new(CounterConfig::new(500.0)).unwrap());
    pilot.scroll_into_view(id);
    pilot.advance(ms(700)).await;
    assert!(pilot.app().has_task(id, TaskSlot::Frames));

    assert!(pilot.app_mut().unmount(id));
    assert_eq!(pilot.app().task_count(), 0);
    pilot.snapshots();

    pilot.advance(ms(3000)).await;
    assert!(pilot.snapshots().is_empty());
}

// ---------------------------------------------------------------------------
// Home page
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn test_home_page_from_toml() {
    let config = SiteConfig::from_toml_str(
        r#"
        [carousel]
        visible_slides = 1
        interval_ms = 1000

        [[stats]]
        label = "Laptops Given"
        target = 120
        suffix = "+"

        [[testimonials]]
        quote = "One"
        name = "A"
        location = "X"

        [[testimonials]]
        quote = "Two"
        name = "B"
        location = "Y"
        "#,
    )
    .unwrap();

    let mut app = App::new(config.app_config());
    let page = HomePage::mount(&mut app, &config).unwrap();
    page.scroll_to_impact(&mut app);
    app.run_for(ms(2600)).await;

    assert_eq!(page.counter_texts(&app), vec!["120+"]);
    let carousel = page.testimonials(&app).unwrap();
    assert_eq!(carousel.current_item().to_string(), "\"One\" - A, X");
    assert!(carousel.transition_enabled());

    page.unmount(&mut app);
    assert_eq!(app.task_count(), 0);
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

#[test]
fn test_missing_category_keeps_other_fields() {
    let mut form = Form::new(FormKind::ApplyForHelp);
    form.set_text("fullName", "Chidi O.").unwrap();
    form.set_text("email", "chidi@example.com").unwrap();
    form.set_text("currentSituation", "Job hunting").unwrap();
    let mut toaster = Toaster::new();

    let err = form.submit(&mut toaster).unwrap_err();
    assert_eq!(err.to_string(), "missing required fields: category");
    assert_eq!(
        toaster.latest().map(|n| (n.title.as_str(), n.variant)),
        Some((MISSING_FIELDS_TITLE, Variant::Default))
    );
    assert_eq!(
        form.value("fullName").and_then(|v| v.as_text()),
        Some("Chidi O.")
    );
    assert!(!form.is_pristine());
}

#[test]
fn test_contact_submission_payload() {
    let mut form = Form::new(FormKind::Contact);
    form.set_text("name", "Amina S.").unwrap();
    form.set_text("email", "amina@example.org").unwrap();
    form.set_text("subject", "Press").unwrap();
    form.select("category", "media").unwrap();
    form.set_text("message", "Hello").unwrap();

    let mut toaster = Toaster::new();
    let submission = form.submit(&mut toaster).unwrap();
    insta::assert_snapshot!(submission.to_json().unwrap(), @r#"{"form":"contact","fields":{"category":"media","email":"amina@example.org","message":"Hello","name":"Amina S.","phone":"","subject":"Press"}}"#);
    assert!(form.is_pristine());
    assert_eq!(
        toaster.latest().map(|n| n.title.as_str()),
        Some("Message Sent Successfully!")
    );
}

#[test]
fn test_custom_notifier() {
    struct Recorder(Vec<String>);
    impl Notifier for Recorder {
        fn notify(&mut self, notification: resurtech_site::forms::Notification) {
            self.0.push(notification.title);
        }
    }

    let mut recorder = Recorder(Vec::new());
    let mut form = Form::new(FormKind::MonetaryDonation);
    assert!(matches!(
        form.submit(&mut recorder),
        Err(Error::Validation { .. })
    ));
    form.set_text("amount", "25").unwrap();
    form.set_text("fullName", "Femi A.").unwrap();
    form.set_text("email", "femi@example.com").unwrap();
    form.submit(&mut recorder).unwrap();

    assert_eq!(
        recorder.0,
        vec![
            MISSING_FIELDS_TITLE.to_owned(),
            "Thank you for your donation!".to_owned()
        ]
    );
}
