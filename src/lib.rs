/*!
bgp-route-importer turns textual BGP routing-table dumps into typed route ranges.

The input is router CLI output such as Cisco `show ip bgp`. Each valid table entry becomes a
[RouteRecord] carrying the prefix, next hop, MED, local preference, weight, origin and a typed
[AsPath]. Records are handed to a [RouteSink] for the configured target peer.

# Example

```
use bgp_route_importer::*;

let table = "\
BGP table version is 2, local router ID is 10.0.0.1
   Network          Next Hop            Metric LocPrf Weight Path
*  1.0.0.0/24       10.0.0.2                               0 65002 i
*>                  10.0.0.1                 0             0 65001 i
";

let config = ImportConfig::default()
    .with_best_routes_only(true)
    .with_v4_peer(TargetPeer::new("peer1", PeerAsType::Ebgp));

let mut importer = importer_for(ImportFileType::Cisco, 1).unwrap();
let mut routes: Vec<RouteRecord> = vec![];
let summary = importer
    .import_routes(&config, table.as_bytes(), &mut routes)
    .unwrap();

assert_eq!(summary.route_names, vec!["route-3"]);
assert_eq!(routes[0].prefix.to_string(), "1.0.0.0/24");
assert_eq!(routes[0].as_path.to_string(), "65001");
```

# Processing

1. the header line (`   Network  Next Hop  Metric LocPrf Weight Path`) fixes the column offsets;
2. every line starting with `*` becomes a candidate, lines with a blank network column repeat the
   previous network;
3. candidates are decoded independently, in parallel unless [ImportConfig::sequential] is set, and
   merged back in table order.

A candidate that fails to decode is skipped and reported in [ImportSummary::skipped]; problems with
the table as a whole are returned as [ImportError].

# Features

- `serde`: `Serialize`/`Deserialize` for all models and [ImportConfig].
- `cli`: the `bgp-route-importer` binary and [io::read_dump].
*/

pub mod error;
pub mod formats;
#[cfg(feature = "oneio")]
pub mod io;
pub mod models;
pub mod parser;
pub mod sink;

pub use error::{FormatError, ImportError, RouteError};
pub use models::*;
pub use parser::{
    importer_for, CiscoImporter, ImportFileType, ImportSummary, RouteImporter, SkippedRoute,
};
pub use sink::{PeerRoutes, RouteSink, RouteTable};
