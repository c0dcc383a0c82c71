
mod ai_test;
mod artwork_test;
mod auth_test;
mod checkout_test;
mod community_test;
mod reaction_test;
