mod candidates;
mod generate;

pub use candidates::cmd_candidates;
pub use generate::cmd_generate;
