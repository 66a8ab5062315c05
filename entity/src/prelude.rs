pub use super::championship::Entity as Championship;
pub use super::file_ref::Entity as FileRef;
pub use super::judge::Entity as Judge;
pub use super::pilot::Entity as Pilot;
pub use super::referral_code::Entity as ReferralCode;
pub use super::stage::Entity as Stage;
pub use super::user::Entity as User;
