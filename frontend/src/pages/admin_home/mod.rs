mod panel;

pub use panel::AdminHomePage;
