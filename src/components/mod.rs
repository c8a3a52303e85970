//! Reusable UI Components

pub mod demo_banner;
pub mod features;
pub mod footer;
pub mod hero;
pub mod hospital_list;
pub mod loading;
pub mod nav;
pub mod stats;
pub mod toast;
pub mod wellness_tip;

pub use demo_banner::DemoBanner;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use hospital_list::HospitalList;
pub use loading::{CardSkeleton, Loading};
pub use nav::Nav;
pub use stats::Stats;
pub use toast::Toast;
pub use wellness_tip::WellnessTip;
