//! Building typed route records from decoded candidate fields.
use crate::error::RouteError;
use crate::models::*;
use crate::parser::cisco::aspath::parse_path;
use crate::parser::cisco::fields::decode_fields;
use crate::parser::cisco::header::HeaderLayout;
use crate::parser::cisco::scanner::Candidate;
use crate::parser::document::RawDocument;
use ipnet::IpNet;
use std::net::IpAddr;
use std::str::FromStr;

/// Mask assumed when the network column carries no `/len`.
pub(crate) const DEFAULT_PREFIX_LEN: u8 = 24;

/// Everything a route task reads. Shared read-only across tasks.
pub(crate) struct BuildContext<'a> {
    pub doc: &'a RawDocument<'a>,
    pub layout: &'a HeaderLayout,
    pub config: &'a ImportConfig,
    pub peer: &'a TargetPeer,
}

/// Parses `addr[/len]`. IPv4-mapped IPv6 addresses are treated as IPv4.
pub(crate) fn parse_network(network: &str) -> Result<IpNet, RouteError> {
    let (addr_text, len_text) = match network.split_once('/') {
        Some((addr, len)) => (addr, Some(len)),
        None => (network, None),
    };

    let addr = IpAddr::from_str(addr_text)
        .map_err(|e| RouteError::invalid_network(network, e))?
        .to_canonical();
    let prefix_len = match len_text {
        Some(len) => u8::from_str(len).map_err(|e| RouteError::invalid_network(network, e))?,
        None => DEFAULT_PREFIX_LEN,
    };

    IpNet::new(addr, prefix_len).map_err(|e| RouteError::invalid_network(network, e))
}

pub(crate) fn parse_next_hop(next_hop: &str) -> Result<IpAddr, RouteError> {
    IpAddr::from_str(next_hop)
        .map(|addr| addr.to_canonical())
        .map_err(|e| RouteError::from((next_hop, e)))
}

/// Empty column text is an absent value.
pub(crate) fn parse_optional_u32(
    field: &'static str,
    value: &str,
) -> Result<Option<u32>, RouteError> {
    if value.is_empty() {
        return Ok(None);
    }
    u32::from_str(value)
        .map(Some)
        .map_err(|e| RouteError::from((field, value, e)))
}

pub(crate) fn build_route(
    ctx: &BuildContext,
    candidate: &Candidate,
) -> Result<RouteRecord, RouteError> {
    let config = ctx.config;

    let prefix = parse_network(&candidate.prefix)?;
    if !config.address_family.accepts(Afi::from(&prefix)) {
        return Err(RouteError::AddressFamilyMismatch {
            network: candidate.prefix.clone(),
        });
    }

    let fields = decode_fields(ctx.doc, ctx.layout, candidate.row, config.retain_next_hop);

    let next_hop = match &fields.next_hop {
        Some(text) => NextHopMode::Manual(parse_next_hop(text)?),
        None => NextHopMode::Local,
    };
    let med = parse_optional_u32("metric", &fields.metric)?;
    let local_pref = parse_optional_u32("local_pref", &fields.local_pref)?;
    let weight = parse_optional_u32("weight", &fields.weight)?;

    let (segments, origin) = parse_path(&fields.path)?;
    let mut as_path = AsPath::from_segments(segments);
    if ctx.peer.is_ebgp() && !as_path.is_empty() {
        as_path.as_set_mode = AsSetMode::IncludeAsSeq;
    }

    Ok(RouteRecord {
        name: format!("{}-{}", config.name_prefix, candidate.row),
        row: candidate.row,
        prefix,
        next_hop,
        local_pref,
        med,
        weight,
        origin: Some(origin),
        as_path,
        status: candidate.status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_network() {
        assert_eq!(
            parse_network("1.0.4.0/22").unwrap(),
            IpNet::from_str("1.0.4.0/22").unwrap()
        );
        assert_eq!(
            parse_network("10.1.1.0").unwrap(),
            IpNet::from_str("10.1.1.0/24").unwrap()
        );
        assert_eq!(
            parse_network("::ffff:10.0.0.0/8").unwrap(),
            IpNet::from_str("10.0.0.0/8").unwrap()
        );
        assert_eq!(
            parse_network("2001:db8::/32").unwrap().prefix_len(),
            32
        );
        assert!(matches!(
            parse_network("10.0.0.0/33"),
            Err(RouteError::InvalidNetwork { .. })
        ));
        assert!(matches!(
            parse_network("10.0.0.0/abc"),
            Err(RouteError::InvalidNetwork { .. })
        ));
        assert!(matches!(
            parse_network("not-an-ip/24"),
            Err(RouteError::InvalidNetwork { .. })
        ));
        assert!(matches!(
            parse_network(""),
            Err(RouteError::InvalidNetwork { .. })
        ));
    }

    #[test]
    fn test_parse_fields() {
        assert_eq!(parse_optional_u32("metric", "").unwrap(), None);
        assert_eq!(parse_optional_u32("metric", "42").unwrap(), Some(42));
        assert_eq!(
            parse_optional_u32("weight", "-1"),
            Err(RouteError::InvalidNumericField {
                field: "weight",
                value: "-1".to_string()
            })
        );
        assert_eq!(
            parse_next_hop("::ffff:192.0.2.1").unwrap(),
            IpAddr::from_str("192.0.2.1").unwrap()
        );
        assert_eq!(
            parse_next_hop(""),
            Err(RouteError::InvalidNextHop("".to_string()))
        );
    }

    fn layout() -> HeaderLayout {
        HeaderLayout {
            network: 3,
            next_hop: 20,
            metric: 40,
            local_pref: 47,
            weight: 54,
            path: 61,
        }
    }

    #[test]
    fn test_build_route() {
        let doc = RawDocument::new(
            "*>i2.0.0.0/16       10.0.0.3                 0    100      0 65003 {65004,65005} ?",
        );
        let layout = layout();
        let peer = TargetPeer::new("peer", PeerAsType::Ebgp);
        let config = ImportConfig::default()
            .with_retain_next_hop(true)
            .with_name_prefix("rr");
        let ctx = BuildContext {
            doc: &doc,
            layout: &layout,
            config: &config,
            peer: &peer,
        };
        let candidate = Candidate {
            row: 0,
            prefix: "2.0.0.0/16".to_string(),
            status: RouteStatus::from_status_codes("*>i"),
        };

        let record = build_route(&ctx, &candidate).unwrap();
        assert_eq!(record.name, "rr-0");
        assert_eq!(record.prefix, IpNet::from_str("2.0.0.0/16").unwrap());
        assert_eq!(
            record.next_hop,
            NextHopMode::Manual(IpAddr::from_str("10.0.0.3").unwrap())
        );
        assert_eq!(record.med, Some(0));
        assert_eq!(record.local_pref, Some(100));
        assert_eq!(record.weight, Some(0));
        assert_eq!(record.origin, Some(Origin::INCOMPLETE));
        assert_eq!(
            record.as_path.segments,
            vec![
                AsPathSegment::sequence([65003]),
                AsPathSegment::set([65004, 65005])
            ]
        );
        assert_eq!(record.as_path.as_set_mode, AsSetMode::IncludeAsSeq);

        let ibgp = TargetPeer::new("peer", PeerAsType::Ibgp);
        let v6_only = config.clone().with_address_family(AddressFamilyMode::Ipv6Only);
        let ctx = BuildContext {
            doc: &doc,
            layout: &layout,
            config: &v6_only,
            peer: &ibgp,
        };
        assert_eq!(
            build_route(&ctx, &candidate),
            Err(RouteError::AddressFamilyMismatch {
                network: "2.0.0.0/16".to_string()
            })
        );

        let config = ImportConfig::default();
        let ctx = BuildContext {
            doc: &doc,
            layout: &layout,
            config: &config,
            peer: &ibgp,
        };
        let record = build_route(&ctx, &candidate).unwrap();
        assert_eq!(record.next_hop, NextHopMode::Local);
        assert_eq!(record.as_path.as_set_mode, AsSetMode::DoNotIncludeLocalAs);
    }
}
