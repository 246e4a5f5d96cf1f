use regex::Regex;

use crate::error::AnalyseError;

/// Selects the records of one benchmark family and extracts their stride,
/// e.g. `16` from `BM_CopyStride/16`.
#[derive(Debug, Clone)]
pub struct StrideFilter {
    re: Regex,
}

impl StrideFilter {
    pub fn new(family: &str) -> StrideFilter {
        let pattern = format!(r"{}/([0-9]+)", regex::escape(family));
        // escaped input always yields a valid pattern
        let re = Regex::new(&pattern).unwrap();
        StrideFilter { re }
    }

    /// Returns `Ok(None)` for names outside the family. The match is not
    /// anchored, it may occur anywhere in `name`.
    pub fn stride(&self, name: &str) -> Result<Option<u64>, AnalyseError> {
        let Some(caps) = self.re.captures(name) else {
            return Ok(None);
        };

        caps[1]
            .parse::<u64>()
            .map(Some)
            .map_err(|source| AnalyseError::StrideOutOfRange {
                name: name.to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::DEFAULT_FAMILY;

    #[test]
    fn matching_name() {
        let filter = StrideFilter::new(DEFAULT_FAMILY);
        assert_eq!(filter.stride("BM_CopyStride/16").unwrap(), Some(16));
        assert_eq!(filter.stride("BM_CopyStride/512").unwrap(), Some(512));
    }

    #[test]
    fn other_family() {
        let filter = StrideFilter::new(DEFAULT_FAMILY);
        assert_eq!(filter.stride("BM_Other/8").unwrap(), None);
        assert_eq!(filter.stride("BM_CopyStride").unwrap(), None);
        assert_eq!(filter.stride("BM_CopyStride/").unwrap(), None);
        assert_eq!(filter.stride("BM_CopyStride/x").unwrap(), None);
    }

    #[test]
    fn unanchored() {
        let filter = StrideFilter::new(DEFAULT_FAMILY);
        assert_eq!(
            filter.stride("BM_CopyStride/32/iterations:10").unwrap(),
            Some(32)
        );
        assert_eq!(filter.stride("prefix_BM_CopyStride/7").unwrap(), Some(7));
        assert_eq!(
            filter.stride("BM_CopyStride/64_mean").unwrap(),
            Some(64)
        );
    }

    #[test]
    fn non_ascii_digits_are_skipped() {
        let filter = StrideFilter::new(DEFAULT_FAMILY);
        assert_eq!(
            filter.stride("BM_CopyStride/\u{0661}\u{0666}").unwrap(),
            None
        );
    }

    #[test]
    fn stride_out_of_range() {
        let filter = StrideFilter::new(DEFAULT_FAMILY);
        assert!(matches!(
            filter.stride("BM_CopyStride/99999999999999999999999"),
            Err(AnalyseError::StrideOutOfRange { .. })
        ));
    }

    #[test]
    fn family_is_literal() {
        let filter = StrideFilter::new("BM_Copy.Stride");
        assert_eq!(filter.stride("BM_CopyXStride/4").unwrap(), None);
        assert_eq!(filter.stride("BM_Copy.Stride/4").unwrap(), Some(4));
    }
}
