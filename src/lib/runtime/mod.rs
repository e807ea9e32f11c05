pub mod directory;
pub mod env_override;
pub mod package_manager;
pub mod system;
