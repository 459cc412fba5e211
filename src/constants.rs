//! Constants used throughout the application

/// Number of frames analyzed per evaluation
pub const DEFAULT_WINDOW_SIZE: usize = 10;

/// Largest accepted window size
pub const MAX_WINDOW_SIZE: usize = 10_000;

/// Minimum chin depth change counted as a nodding move at the reference distance
pub const DEFAULT_NOD_SENSITIVITY: f64 = 0.0125;

/// Minimum side-of-head depth change counted as a shaking move at the reference distance
pub const DEFAULT_SHAKE_SENSITIVITY: f64 = 0.02;

/// Maximum vertical chin travel within a window that still counts as a nod
pub const DEFAULT_VERTICAL_ADJUSTMENT: f64 = 0.2;

/// Maximum horizontal side-of-head travel within a window that still counts as a shake
pub const DEFAULT_HORIZONTAL_ADJUSTMENT: f64 = 0.12;

/// Top-to-bottom head span (normalized units) at the reference distance
pub const DEFAULT_REFERENCE_SPAN: f64 = 0.5;

/// Distance factor reported before any frame has been seen
pub const NOMINAL_DISTANCE_FACTOR: f64 = 1.0;

/// Face mesh landmark indices
pub const CHIN_LANDMARK: usize = 199;
pub const SIDE_HEAD_LANDMARK: usize = 447;
pub const TOP_HEAD_LANDMARK: usize = 10;
pub const BOTTOM_HEAD_LANDMARK: usize = 152;

/// Number of landmarks in the face mesh (without refined irises)
pub const FACE_MESH_LANDMARKS: usize = 468;

/// Number of landmarks in the face mesh with refined irises
pub const FACE_MESH_REFINED_LANDMARKS: usize = 478;

/// Coordinates per landmark
pub const COORDS_PER_LANDMARK: usize = 3;

/// Values on one line of `points` input (four landmarks)
pub const POINTS_LINE_VALUES: usize = 4 * COORDS_PER_LANDMARK;

/// Label printed for a nod
pub const NOD_LABEL: &str = "YES";

/// Label printed for a head shake
pub const SHAKE_LABEL: &str = "NO";
