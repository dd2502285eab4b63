pub mod commit_repo;

pub use commit_repo::CommitRepo;
