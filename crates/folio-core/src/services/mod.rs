pub mod modal;
pub mod portfolio_view;
pub mod site_app;
pub mod skills;
pub mod theme;

pub use modal::ModalState;
pub use portfolio_view::PortfolioView;
pub use site_app::SiteApp;
pub use skills::SkillsPanel;
pub use theme::{THEME_KEY, ThemeToggle};
