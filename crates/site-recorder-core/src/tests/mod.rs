mod browser;
mod obs_protocol;
mod webdriver;
