pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use model::day::DailyCount;
pub use model::grid::{bucket_for, BucketGrid, CountGrid, DateGrid, GRID_COLS, GRID_ROWS};
pub use model::source::ContributionDocument;
pub use model::theme::{contrast_ratio, hex_to_rgb, Palette, Theme, WCAG_AA_NORMAL};
pub use repository::{ContributionSource, FileContributionSource, HttpContributionSource};
pub use service::dto::{ContributionGraph, MonthLabel, WEEKDAY_LABELS};
pub use service::graph_service::{build_graph, monthly_totals, MonthTotal};
pub use usecase::load_graph::LoadGraphUseCase;
