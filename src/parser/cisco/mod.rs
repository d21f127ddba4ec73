/*!
Importer for Cisco `show ip bgp` style routing tables.

```text
BGP table version is 12, local router ID is 10.0.0.1
Status codes: s suppressed, d damped, h history, * valid, > best, i - internal
Origin codes: i - IGP, e - EGP, ? - incomplete

   Network          Next Hop            Metric LocPrf Weight Path
*  1.0.0.0/24       10.0.0.2                               0 65002 65010 i
*>                  10.0.0.1                 0             0 65001 65010 i
*> 2001:db8:abc::/48
                    2001:db8::1              0             0 65001 [65100,65101] i
```

Columns are located from the header line once, then each line starting with `*` becomes a
candidate. Candidates are decoded independently, optionally in parallel.
*/
mod aspath;
mod builder;
mod fields;
mod header;
mod scanner;

use crate::error::{FormatError, ImportError};
use crate::models::*;
use crate::parser::document::RawDocument;
use crate::parser::tasks::run_tasks;
use crate::parser::{designated_peer, ImportSummary, RouteImporter, SkippedRoute};
use crate::sink::RouteSink;
use builder::{build_route, BuildContext};
use log::{debug, info, warn};
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub struct CiscoImporter {
    session_id: u32,
    valid_routes: usize,
    candidates: usize,
}

impl CiscoImporter {
    pub fn new(session_id: u32) -> Self {
        debug!("creating Cisco route importer for session {}", session_id);
        CiscoImporter {
            session_id,
            valid_routes: 0,
            candidates: 0,
        }
    }

    /// Number of candidate lines found by the most recent import.
    pub fn candidates(&self) -> usize {
        self.candidates
    }
}

impl Display for CiscoImporter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cisco route importer, session id: {:8}, valid routes: {}",
            self.session_id, self.valid_routes
        )
    }
}

impl RouteImporter for CiscoImporter {
    fn session_id(&self) -> u32 {
        self.session_id
    }

    fn valid_routes(&self) -> usize {
        self.valid_routes
    }

    fn import_routes(
        &mut self,
        config: &ImportConfig,
        input: &[u8],
        sink: &mut dyn RouteSink,
    ) -> Result<ImportSummary, ImportError> {
        if input.is_empty() {
            return Err(ImportError::EmptyInput);
        }
        let text = std::str::from_utf8(input).map_err(|_| FormatError::InvalidUtf8)?;
        let doc = RawDocument::new(text);

        let now = Instant::now();
        let (layout, first_row) = header::locate_header(&doc)?;
        info!(
            "found table header on line {} in {} ms",
            first_row,
            now.elapsed().as_millis()
        );

        let peer = designated_peer(config)?;

        let now = Instant::now();
        let candidates =
            scanner::scan_candidates(&doc, &layout, first_row, config.best_routes_only)?;
        self.candidates = candidates.len();
        info!(
            "found {} candidate routes in {} ms",
            candidates.len(),
            now.elapsed().as_millis()
        );

        let now = Instant::now();
        let ctx = BuildContext {
            doc: &doc,
            layout: &layout,
            config,
            peer,
        };
        let results = run_tasks(&candidates, config.sequential, |c| build_route(&ctx, c));

        let mut summary = ImportSummary {
            candidates: candidates.len(),
            ..Default::default()
        };
        for (candidate, result) in candidates.iter().zip(results) {
            match result {
                Ok(route) => {
                    summary.route_names.push(route.name.clone());
                    sink.append_route(peer, route);
                }
                Err(error) => {
                    warn!("skipping route on line {}: {}", candidate.row + 1, error);
                    summary.skipped.push(SkippedRoute {
                        row: candidate.row,
                        error,
                    });
                }
            }
        }
        self.valid_routes += summary.route_names.len();
        info!(
            "imported {} routes ({} skipped) for peer {} in {} ms",
            summary.route_names.len(),
            summary.skipped.len(),
            peer.name,
            now.elapsed().as_millis()
        );

        Ok(summary)
    }
}
