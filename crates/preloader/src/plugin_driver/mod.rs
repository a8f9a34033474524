mod html_plugin_driver;
pub(crate) use html_plugin_driver::*;
