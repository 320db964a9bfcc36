//! Chart layout: turns pivoted tables into renderer-agnostic scenes.

pub mod layout;
pub mod palette;
pub mod scale;
pub mod scene;
pub mod spec;
pub mod svg;

pub use layout::{layout, Viewport};
pub use scene::{arc_path, Anchor, LegendEntry, Primitive, Role, Scene};
pub use spec::{ChartSpec, Domain, Kind, Series};
pub use svg::{to_svg, RendererBackend, SvgBackend};
