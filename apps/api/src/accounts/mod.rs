// Per-user account data: the token balance that gates live mock interviews,
// and the default resume pre-filled into new generation requests.

pub mod default_resume;
pub mod handlers;
pub mod tokens;
