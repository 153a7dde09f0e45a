pub mod catalog;
pub mod ids;
pub mod project;
pub mod project_view;
pub mod skill;
pub mod theme;

pub use catalog::Catalog;
pub use ids::ProjectId;
pub use project::{ProjectConfig, ProjectRecord};
pub use project_view::DetailView;
pub use skill::{SkillBar, SkillConfig};
pub use theme::Theme;
