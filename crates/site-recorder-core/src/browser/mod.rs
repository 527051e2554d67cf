mod controller;
mod driver;
pub(crate) mod webdriver;

pub use {
    controller::BrowserController,
    driver::{BrowserDriver, BrowserWindow, WindowHandle},
    webdriver::{WebDriverClient, WebDriverOptions},
};
