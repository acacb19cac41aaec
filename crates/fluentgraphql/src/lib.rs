pub use fluentgraphql_core::*;
