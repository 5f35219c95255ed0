//! Feature localization
//!
//! - **Islands / lakes**: connected components of land or water, each with a
//!   geometric-median center for map annotation
//! - **Channels**: straight runs of narrow water flanked by land on both sides

mod channels;
mod locate;

pub use channels::{detect_channels, Channel, ChannelDetector, ChannelParams, Orientation};
pub use locate::{find_islands, find_lakes, locate_features, Feature, FeatureLocator, LocateParams};
