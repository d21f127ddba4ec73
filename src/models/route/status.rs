use bitflags::bitflags;

bitflags! {
    /// Status codes printed in the leading column of a `show ip bgp` table line.
    ///
    /// ```text
    /// Status codes: s suppressed, d damped, h history, * valid, > best, i - internal,
    ///               r RIB-failure, S Stale, m multipath, b backup-path, x best-external,
    ///               a additional-path, c RIB-compressed,
    /// ```
    #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct RouteStatus: u16 {
        const VALID = 0x0001;
        const BEST = 0x0002;
        const INTERNAL = 0x0004;
        const SUPPRESSED = 0x0008;
        const DAMPED = 0x0010;
        const HISTORY = 0x0020;
        const RIB_FAILURE = 0x0040;
        const STALE = 0x0080;
        const MULTIPATH = 0x0100;
        const BACKUP_PATH = 0x0200;
        const BEST_EXTERNAL = 0x0400;
        const ADDITIONAL_PATH = 0x0800;
        const RIB_COMPRESSED = 0x1000;
    }
}

impl RouteStatus {
    /// Collects the flags present in the status column. Whitespace and unknown characters are
    /// ignored.
    pub fn from_status_codes(codes: &str) -> RouteStatus {
        codes
            .chars()
            .filter_map(RouteStatus::from_code)
            .fold(RouteStatus::empty(), |acc, flag| acc | flag)
    }

    fn from_code(code: char) -> Option<RouteStatus> {
        let flag = match code {
            '*' => RouteStatus::VALID,
            '>' => RouteStatus::BEST,
            'i' => RouteStatus::INTERNAL,
            's' => RouteStatus::SUPPRESSED,
            'd' => RouteStatus::DAMPED,
            'h' => RouteStatus::HISTORY,
            'r' => RouteStatus::RIB_FAILURE,
            'S' => RouteStatus::STALE,
            'm' => RouteStatus::MULTIPATH,
            'b' => RouteStatus::BACKUP_PATH,
            'x' => RouteStatus::BEST_EXTERNAL,
            'a' => RouteStatus::ADDITIONAL_PATH,
            'c' => RouteStatus::RIB_COMPRESSED,
            _ => return None,
        };
        Some(flag)
    }

    /// Renders the flags back into status codes, e.g. `*>i`. Valid and best always come first.
    pub fn to_status_codes(&self) -> String {
        let mut codes = String::with_capacity(3);
        for (flag, code) in [
            (RouteStatus::VALID, '*'),
            (RouteStatus::BEST, '>'),
            (RouteStatus::SUPPRESSED, 's'),
            (RouteStatus::DAMPED, 'd'),
            (RouteStatus::HISTORY, 'h'),
            (RouteStatus::MULTIPATH, 'm'),
            (RouteStatus::BACKUP_PATH, 'b'),
            (RouteStatus::BEST_EXTERNAL, 'x'),
            (RouteStatus::ADDITIONAL_PATH, 'a'),
            (RouteStatus::RIB_FAILURE, 'r'),
            (RouteStatus::STALE, 'S'),
            (RouteStatus::RIB_COMPRESSED, 'c'),
            (RouteStatus::INTERNAL, 'i'),
        ] {
            if self.contains(flag) {
                codes.push(code);
            }
        }
        codes
    }

    pub fn is_valid(&self) -> bool {
        self.contains(RouteStatus::VALID)
    }

    pub fn is_best(&self) -> bool {
        self.contains(RouteStatus::BEST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let status = RouteStatus::from_status_codes("*>i");
        assert!(status.is_valid());
        assert!(status.is_best());
        assert!(status.contains(RouteStatus::INTERNAL));
        assert_eq!(status.to_status_codes(), "*>i");

        let status = RouteStatus::from_status_codes("*  ");
        assert_eq!(status, RouteStatus::VALID);
        assert!(!status.is_best());

        let status = RouteStatus::from_status_codes("s> ");
        assert!(!status.is_valid());
        assert!(status.contains(RouteStatus::SUPPRESSED));

        assert_eq!(RouteStatus::from_status_codes("   "), RouteStatus::empty());
        assert_eq!(RouteStatus::from_status_codes("*Z"), RouteStatus::VALID);
    }
}
