use crate::{
    BrowserController, Timings, WindowHandle,
    browser::webdriver::{parse_base, vendor_options_key},
    testing::FakeDriver,
};

use std::time::Duration;

use tokio::time::Instant;

/// WHAT: Opening a website navigates, waits for the page, then focuses it
/// WHY: Recording must start on a loaded, foreground page
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_blank_browser_when_opening_website_then_navigates_and_focuses_after_settle() {
    // Given: A browser controller over a blank window
    let timings = Timings::default();
    let browser = BrowserController::new(FakeDriver::new(), &timings);
    let started = Instant::now();

    // When: Opening a website
    browser.open_website("https://example.com").await.unwrap();

    // Then: The page settled for the full interval and was focused
    assert!(started.elapsed() >= timings.page_settle);
    assert_eq!(browser.driver().executed_scripts(), vec!["window.focus();"]);
    let url = browser.window_url(&WindowHandle::new("main")).await.unwrap();
    assert_eq!(url, "https://example.com");
}

/// WHAT: Navigation failures surface as errors
/// WHY: The caller decides how an unreachable site is reported
#[tokio::test(start_paused = true)]
async fn given_failing_navigation_when_opening_website_then_automation_error() {
    // Given: A driver that rejects navigation
    let browser = BrowserController::new(FakeDriver::new().failing_navigation(), &Timings::default());

    // When: Opening a website
    let result = browser.open_website("https://unreachable.invalid").await;

    // Then: An automation error is returned and no focus script ran
    assert!(matches!(result, Err(crate::RecorderError::Automation { .. })));
    assert!(browser.driver().executed_scripts().is_empty());
}

/// WHAT: Reading a window's URL switches the driver's current window
/// WHY: Callers must know reads are not side-effect free
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_two_windows_when_reading_second_then_it_becomes_current() {
    // Given: Two open windows
    let driver = FakeDriver::new().with_window("tab-2", "https://docs.rs/", "Docs.rs");
    let browser = BrowserController::new(driver, &Timings::default());

    // When: Reading the second window's URL
    let url = browser.window_url(&WindowHandle::new("tab-2")).await.unwrap();

    // Then: Its URL is reported, it is now current, and its title is readable
    assert_eq!(url, "https://docs.rs/");
    assert_eq!(browser.driver().current_handle(), WindowHandle::new("tab-2"));
    assert_eq!(browser.current_title().await.unwrap(), "Docs.rs");
}

/// WHAT: Reading a window returns its URL and title
/// WHY: Logs and outcomes name the matched window by title
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_second_window_when_reading_window_then_url_and_title_reported() {
    // Given: Two open windows
    let driver = FakeDriver::new().with_window("tab-2", "https://docs.rs/", "Docs.rs");
    let browser = BrowserController::new(driver, &Timings::default());

    // When: Reading the second window
    let window = browser.read_window(&WindowHandle::new("tab-2")).await.unwrap();

    // Then: Handle, URL and title come back and it is current
    assert_eq!(window.handle, WindowHandle::new("tab-2"));
    assert_eq!(window.url, "https://docs.rs/");
    assert_eq!(window.title, "Docs.rs");
    assert_eq!(browser.driver().current_handle(), WindowHandle::new("tab-2"));
}

/// WHAT: Window handles are listed in driver order
/// WHY: First-match policy depends on enumeration order
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_several_windows_when_listing_handles_then_driver_order_kept() {
    // Given: Three windows
    let driver = FakeDriver::new()
        .with_window("b", "https://b.test/", "B")
        .with_window("a", "https://a.test/", "A");
    let browser = BrowserController::new(driver, &Timings::default());

    // When: Listing handles
    let handles = browser.list_window_handles().await.unwrap();

    // Then: Order matches the driver
    let names: Vec<&str> = handles.iter().map(WindowHandle::as_str).collect();
    assert_eq!(names, vec!["main", "b", "a"]);
}

/// WHAT: Scrolling issues one scroll per pause until the deadline
/// WHY: Scroll pacing is part of the recorded video's look
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_five_second_window_when_scrolling_then_ten_scrolls_and_full_duration() {
    // Given: Standard 500ms pacing
    let browser = BrowserController::new(FakeDriver::new(), &Timings::default());
    let started = Instant::now();

    // When: Scrolling for five seconds
    let scrolls = browser
        .scroll_continuously(Duration::from_secs(5))
        .await
        .unwrap();

    // Then: Ten scrolls, and the call returned only after the deadline
    assert_eq!(scrolls, 10);
    assert_eq!(browser.driver().scroll_count(), 10);
    assert!(started.elapsed() >= Duration::from_secs(5));
}

/// WHAT: Zero duration issues no scrolls
/// WHY: Edge case for the loop condition
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_zero_duration_when_scrolling_then_no_scrolls() {
    // Given: A browser controller
    let browser = BrowserController::new(FakeDriver::new(), &Timings::default());

    // When: Scrolling for zero time
    let scrolls = browser.scroll_continuously(Duration::ZERO).await.unwrap();

    // Then: Nothing was scrolled
    assert_eq!(scrolls, 0);
}

/// WHAT: Driver endpoints keep their path prefix
/// WHY: Remote grids mount WebDriver under a path such as /wd/hub
#[test]
#[allow(clippy::unwrap_used)]
fn given_endpoint_with_path_when_joining_session_then_prefix_kept() {
    // Given: An endpoint without trailing slash
    let base = parse_base("http://localhost:4444/wd/hub").unwrap();

    // When: Joining the session route
    let url = base.join("session").unwrap();

    // Then: The path prefix survives
    assert_eq!(url.as_str(), "http://localhost:4444/wd/hub/session");
}

/// WHAT: Launch arguments go under the browser's vendor capability
/// WHY: Each driver only reads its own options key
#[test]
fn given_browser_names_when_choosing_options_key_then_vendor_specific() {
    assert_eq!(vendor_options_key("chrome"), "goog:chromeOptions");
    assert_eq!(vendor_options_key("firefox"), "moz:firefoxOptions");
    assert_eq!(vendor_options_key("MicrosoftEdge"), "ms:edgeOptions");
}
