// Testbed directory layout, distro registry and Vagrantfile rendering
pub mod types;
pub mod layout;
pub mod distros;
pub mod template;
pub mod scaffold;

// Re-export the pieces command handlers use
pub use types::Distro;
pub use layout::Testbed;
pub use distros::DistroRegistry;
pub use template::render_vagrantfile;
pub use scaffold::create_testbed;
