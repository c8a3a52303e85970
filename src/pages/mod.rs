//! Page Components

pub mod about;
pub mod analytics;
pub mod chatbot;
pub mod detection;
pub mod helpdesk;
pub mod home;
pub mod learn;
pub mod share;
pub mod tools;

pub use about::About;
pub use analytics::Analytics;
pub use chatbot::Chatbot;
pub use detection::Detection;
pub use helpdesk::Helpdesk;
pub use home::Home;
pub use learn::Learn;
pub use share::Share;
pub use tools::Tools;
