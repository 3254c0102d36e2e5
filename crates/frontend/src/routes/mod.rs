pub mod boundary;
pub mod table;

pub use boundary::{LoadingFallback, RouteBoundary};
pub use table::{
    list_prefetchable, resolve_loader, resolve_metadata, RouteDescriptor, RouteKind, RouteMetadata,
};
