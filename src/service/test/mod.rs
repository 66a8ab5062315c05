mod entity;
mod referral;
mod registration;
