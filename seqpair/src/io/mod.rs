/// External (serializable) representations of problems and solutions
pub mod ext_repr;

/// Conversion of external representations into a [`Problem`](crate::entities::Problem)
pub mod import;

/// Conversion of a [`Solution`](crate::entities::Solution) into its external representation
pub mod export;

/// Rendering floorplans as SVG documents
pub mod svg;
