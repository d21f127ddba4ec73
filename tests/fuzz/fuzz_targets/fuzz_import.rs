#![no_main]
use bgp_route_importer::*;
use libfuzzer_sys::fuzz_target;

const HEADER: &[u8] = b"   Network          Next Hop            Metric LocPrf Weight Path\n";

fn import(config: &ImportConfig, input: &[u8]) -> Result<Vec<RouteRecord>, ImportError> {
    let mut importer = CiscoImporter::new(0);
    let mut routes: Vec<RouteRecord> = vec![];
    importer.import_routes(config, input, &mut routes)?;
    Ok(routes)
}

fuzz_target!(|data: &[u8]| {
    let config = ImportConfig::default()
        .with_retain_next_hop(true)
        .with_v4_peer(TargetPeer::new("peer", PeerAsType::Ebgp));

    // most random inputs lack a header, so also try the data as table rows
    let mut table = HEADER.to_vec();
    table.extend_from_slice(data);

    for input in [data, table.as_slice()] {
        let parallel = import(&config, input);
        let sequential = import(&config.clone().with_sequential(true), input);
        assert_eq!(parallel, sequential);
    }
});
