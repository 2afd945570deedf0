use crate::model::calendar::{Performance, ShowEntry};
use crate::model::status::PerformanceStatus;

/// Collapse the performances of one show on one day into a single status.
///
/// Rules are checked in order, first match wins:
/// 1. only pre-sale/unknown, with at least one pre-sale → `PreSale`
/// 2. any available → `Available`
/// 3. non-empty and all sold out → `SoldOut`
/// 4. otherwise → `Unknown`
pub fn aggregate_status(performances: &[Performance]) -> PerformanceStatus {
    aggregate_statuses(performances.iter().map(|p| p.status))
}

pub fn aggregate_statuses<I>(statuses: I) -> PerformanceStatus
where
    I: IntoIterator<Item = PerformanceStatus>,
{
    let mut any = false;
    let mut pre_sale = false;
    let mut available = false;
    let mut undecided_only = true;
    let mut sold_out_only = true;

    for status in statuses {
        any = true;
        match status {
            PerformanceStatus::PreSale => {
                pre_sale = true;
                sold_out_only = false;
            }
            PerformanceStatus::Unknown => sold_out_only = false,
            PerformanceStatus::Available => {
                available = true;
                undecided_only = false;
                sold_out_only = false;
            }
            PerformanceStatus::SoldOut => undecided_only = false,
        }
    }

    if any && undecided_only && pre_sale {
        PerformanceStatus::PreSale
    } else if available {
        PerformanceStatus::Available
    } else if any && sold_out_only {
        PerformanceStatus::SoldOut
    } else {
        PerformanceStatus::Unknown
    }
}

impl ShowEntry {
    pub fn overall_status(&self) -> PerformanceStatus {
        aggregate_status(&self.performances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::status::PerformanceStatus::*;

    fn agg(statuses: &[PerformanceStatus]) -> PerformanceStatus {
        aggregate_statuses(statuses.iter().copied())
    }

    #[test]
    fn test_empty_is_unknown() {
        assert_eq!(agg(&[]), Unknown);
        assert_eq!(aggregate_status(&[]), Unknown);
    }

    #[test]
    fn test_available_beats_sold_out() {
        assert_eq!(agg(&[Available, SoldOut]), Available);
        assert_eq!(agg(&[SoldOut, SoldOut, Available]), Available);
    }

    #[test]
    fn test_pre_sale_only() {
        assert_eq!(agg(&[PreSale, PreSale]), PreSale);
        assert_eq!(agg(&[PreSale, Unknown]), PreSale);
        assert_eq!(agg(&[Unknown, PreSale, Unknown]), PreSale);
    }

    #[test]
    fn test_pre_sale_with_available_is_available() {
        assert_eq!(agg(&[PreSale, Available]), Available);
    }

    #[test]
    fn test_all_sold_out() {
        assert_eq!(agg(&[SoldOut, SoldOut]), SoldOut);
        assert_eq!(agg(&[SoldOut]), SoldOut);
    }

    #[test]
    fn test_inconclusive_mixes() {
        assert_eq!(agg(&[Unknown]), Unknown);
        assert_eq!(agg(&[Unknown, Unknown]), Unknown);
        assert_eq!(agg(&[SoldOut, Unknown]), Unknown);
        assert_eq!(agg(&[SoldOut, PreSale]), Unknown);
    }

    #[test]
    fn test_any_available_wins_unless_empty() {
        for a in PerformanceStatus::ALL {
            for b in PerformanceStatus::ALL {
                let result = agg(&[a, b, Available]);
                assert_eq!(result, Available, "{:?} {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_overall_status_on_entry() {
        let entry = ShowEntry {
            full_show_name: "クラブマウスビート".to_string(),
            performances: vec![Performance {
                ticket_id: "T-1".to_string(),
                round: 1,
                status: SoldOut,
            }],
        };
        assert_eq!(entry.overall_status(), SoldOut);
    }
}
