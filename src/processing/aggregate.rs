//! Top-level aggregation pipeline.

use super::chain::Chain;
use super::compact::unlink_covered;
use super::materialize::collect_entries;
use super::merge::{no_merge, Merge};
use super::range::AddressRange;
use super::sibling::merge_siblings;
use crate::models::{BasicEntry, CidrEntry, Prefix};

/// Reduce `entries` to the smallest set of prefixes covering the same addresses.
///
/// Covered entries are folded into the entry covering them, then sibling
/// blocks are folded into their parent, each fold calling `merge(keep,
/// delete)`. Survivors get their final prefix through
/// [`CidrEntry::set_network`] and are returned in ascending address order.
/// With fewer than two entries the input is returned untouched.
///
/// # Examples
/// ```
/// use cidr_aggregate::models::{CountedEntry, Prefix};
/// use cidr_aggregate::processing::aggregate;
///
/// let entries = vec![
///     CountedEntry::new(Prefix::parse("8.8.8.8/29").unwrap(), 1, ""),
///     CountedEntry::new(Prefix::parse("8.8.8.0/29").unwrap(), 1, ""),
/// ];
/// let result = aggregate(entries, CountedEntry::merge_add_count);
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].prefix.to_string(), "8.8.8.0/28");
/// assert_eq!(result[0].count, 2);
/// ```
pub fn aggregate<E, M>(mut entries: Vec<E>, mut merge: M) -> Vec<E>
where
    E: CidrEntry,
    M: Merge<E>,
{
    if entries.len() < 2 {
        return entries;
    }

    let ranges: Vec<AddressRange> = entries
        .iter()
        .map(|e| AddressRange::from_prefix(&e.network()))
        .collect();
    let mut chain = Chain::build(ranges);

    unlink_covered(&mut chain, &mut entries, &mut merge);
    merge_siblings(&mut chain, &mut entries, &mut merge);

    log::debug!(
        "aggregate: {} entries -> {} entries",
        entries.len(),
        chain.live()
    );
    collect_entries(&chain, entries)
}

/// Aggregate bare prefixes.
///
/// # Examples
/// ```
/// use cidr_aggregate::models::Prefix;
/// use cidr_aggregate::processing::aggregate_prefixes;
///
/// let prefixes = ["192.0.2.0/25", "192.0.2.128/25"]
///     .iter()
///     .map(|s| Prefix::parse(s).unwrap())
///     .collect();
/// assert_eq!(
///     aggregate_prefixes(prefixes),
///     vec![Prefix::parse("192.0.2.0/24").unwrap()]
/// );
/// ```
pub fn aggregate_prefixes(prefixes: Vec<Prefix>) -> Vec<Prefix> {
    let entries: Vec<BasicEntry> = prefixes.into_iter().map(BasicEntry::new).collect();
    aggregate(entries, no_merge::<BasicEntry>)
        .into_iter()
        .map(|e| e.prefix)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CountedEntry;

    fn counted(prefixes: &[&str]) -> Vec<CountedEntry> {
        prefixes
            .iter()
            .map(|s| CountedEntry::new(Prefix::parse(s).unwrap(), 1, "US"))
            .collect()
    }

    fn summary(entries: &[CountedEntry]) -> Vec<(String, u64)> {
        entries
            .iter()
            .map(|e| (e.prefix.to_string(), e.count))
            .collect()
    }

    fn check(prefixes: &[&str], want: &[(&str, u64)]) {
        let got = aggregate(counted(prefixes), CountedEntry::merge_add_count);
        let want: Vec<(String, u64)> = want.iter().map(|(p, c)| (p.to_string(), *c)).collect();
        assert_eq!(summary(&got), want, "input: {prefixes:?}");
    }

    #[test]
    fn test_empty() {
        let mut calls = 0;
        let got = aggregate(
            Vec::<CountedEntry>::new(),
            |_: &mut CountedEntry, _: &mut CountedEntry| calls += 1,
        );
        assert!(got.is_empty());
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_single_entry_untouched() {
        check(&["8.8.8.0/24"], &[("8.8.8.0/24", 1)]);
    }

    #[test]
    fn test_ipv4_basic() {
        check(&["8.8.8.8/29", "8.8.8.0/24"], &[("8.8.8.0/24", 2)]);
        check(&["8.8.8.8/29", "8.8.8.0/29"], &[("8.8.8.0/28", 2)]);
        check(
            &["8.8.8.8/29", "8.8.8.16/29"],
            &[("8.8.8.8/29", 1), ("8.8.8.16/29", 1)],
        );
        check(
            &["8.8.8.0/25", "9.9.9.0/25", "8.8.8.128/25"],
            &[("8.8.8.0/24", 2), ("9.9.9.0/25", 1)],
        );
        check(&["192.0.2.0/25", "192.0.2.128/25"], &[("192.0.2.0/24", 2)]);
        check(
            &["192.0.2.0/25", "198.51.100.0/25", "192.0.2.128/25"],
            &[("192.0.2.0/24", 2), ("198.51.100.0/25", 1)],
        );
    }

    #[test]
    fn test_ipv4_runs_collapse() {
        for len in [26u8, 27, 28, 29] {
            let step = 1u32 << (32 - len);
            let prefixes: Vec<String> = (0..(256 / step))
                .map(|i| format!("192.0.2.{}/{}", i * step, len))
                .collect();
            let refs: Vec<&str> = prefixes.iter().map(|s| s.as_str()).collect();
            check(&refs, &[("192.0.2.0/24", u64::from(256 / step))]);
        }
    }

    #[test]
    fn test_ipv4_mixed_sizes() {
        check(
            &[
                "192.0.2.0/26",
                "192.0.2.64/26",
                "192.0.2.192/26",
                "192.0.2.128/28",
                "192.0.2.144/28",
                "192.0.2.160/28",
                "192.0.2.176/28",
            ],
            &[("192.0.2.0/24", 7)],
        );
        check(
            &["192.0.2.0/25", "192.0.2.128/25", "192.0.2.248/29"],
            &[("192.0.2.0/24", 3)],
        );
    }

    #[test]
    fn test_ipv4_duplicates_and_nesting() {
        check(&["192.0.2.1/32", "192.0.2.1/32"], &[("192.0.2.1/32", 2)]);
        check(
            &[
                "192.0.2.0/25",
                "192.0.2.0/26",
                "192.0.2.0/27",
                "192.0.2.0/28",
                "192.0.2.0/29",
                "192.0.2.0/30",
            ],
            &[("192.0.2.0/25", 6)],
        );
        check(
            &["192.0.2.0/24", "198.51.100.0/24", "203.0.113.0/24"],
            &[
                ("192.0.2.0/24", 1),
                ("198.51.100.0/24", 1),
                ("203.0.113.0/24", 1),
            ],
        );
    }

    #[test]
    fn test_ipv4_default_route() {
        check(
            &[
                "0.0.0.0/0",
                "192.0.2.0/24",
                "198.51.100.0/24",
                "203.0.113.0/24",
                "255.255.255.255/32",
            ],
            &[("0.0.0.0/0", 5)],
        );
        check(
            &[
                "0.0.0.0/0",
                "0.0.0.0/0",
                "255.255.255.255/32",
                "255.255.255.255/32",
            ],
            &[("0.0.0.0/0", 4)],
        );
    }

    #[test]
    fn test_ipv4_route_table() {
        check(
            &[
                "192.168.0.0/25",
                "192.168.0.128/25",
                "192.168.1.0/24",
                "192.168.3.0/24",
                "192.168.4.0/24",
                "192.168.5.0/26",
                "192.168.128.0/22",
                "192.168.132.0/22",
                "192.168.128.0/21",
            ],
            &[
                ("192.168.0.0/23", 3),
                ("192.168.3.0/24", 1),
                ("192.168.4.0/24", 1),
                ("192.168.5.0/26", 1),
                ("192.168.128.0/21", 3),
            ],
        );
    }

    #[test]
    fn test_ipv6() {
        check(
            &[
                "2001:db8::/64",
                "2001:db8:0:1::/64",
                "2001:db8:0:2::/64",
                "2001:db8:0:3::/64",
                "2001:db8:0:4::/64",
            ],
            &[("2001:db8::/62", 4), ("2001:db8:0:4::/64", 1)],
        );
        check(
            &[
                "::/0",
                "2001:db8::/32",
                "2001:db8::/126",
                "2001:db8::/127",
                "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff/128",
            ],
            &[("::/0", 5)],
        );
        check(
            &[
                "::/0",
                "::/0",
                "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff/128",
                "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff/128",
            ],
            &[("::/0", 4)],
        );
    }

    #[test]
    fn test_mixed_families() {
        let mut prefixes: Vec<String> = (0..16).map(|i| format!("192.0.2.{}/29", i * 8)).collect();
        prefixes.extend(
            ["2001:db8::/64", "2001:db8:0:2::/64", "2001:db8:0:3::/64", "2001:db8:0:1::/64"]
                .iter()
                .map(|s| s.to_string()),
        );
        prefixes.extend((16..32).filter(|i| *i != 21).map(|i| format!("192.0.2.{}/29", i * 8)));
        prefixes.push("2001:db8:0:4::/64".to_string());
        prefixes.extend((168..176).map(|i| format!("192.0.2.{i}/32")));
        let refs: Vec<&str> = prefixes.iter().map(|s| s.as_str()).collect();
        check(
            &refs,
            &[
                ("192.0.2.0/24", 39),
                ("2001:db8::/62", 4),
                ("2001:db8:0:4::/64", 1),
            ],
        );
    }

    #[test]
    fn test_given_counts() {
        let input = vec![
            CountedEntry::new(Prefix::parse("8.8.9.128/25").unwrap(), 1, "US"),
            CountedEntry::new(Prefix::parse("8.8.8.0/24").unwrap(), 39, "US"),
            CountedEntry::new(Prefix::parse("8.8.9.0/25").unwrap(), 4, "US"),
        ];
        let got = aggregate(input, CountedEntry::merge_add_count);
        assert_eq!(summary(&got), vec![("8.8.8.0/23".to_string(), 44)]);
    }

    #[test]
    fn test_merge_copies_delete_note() {
        let x = CountedEntry::new(Prefix::parse("8.8.8.128/25").unwrap(), 10, "US");
        let y = CountedEntry::new(Prefix::parse("8.8.8.0/25").unwrap(), 20, "CA");
        let got = aggregate(vec![x, y], |k: &mut CountedEntry, d: &mut CountedEntry| {
            k.note = d.note.clone()
        });
        assert_eq!(got.len(), 1);
        // 8.8.8.0/25 is kept and takes the note of 8.8.8.128/25
        assert_eq!(got[0].note, "US");
        assert_eq!(got[0].count, 20);
        assert_eq!(got[0].prefix.to_string(), "8.8.8.0/24");
    }

    #[test]
    fn test_borrowed_entries_keep_identity() {
        let mut a = CountedEntry::new(Prefix::parse("10.0.0.0/25").unwrap(), 1, "a");
        let mut b = CountedEntry::new(Prefix::parse("10.0.0.128/25").unwrap(), 1, "b");
        {
            let got = aggregate(
                vec![&mut b, &mut a],
                |k: &mut &mut CountedEntry, d: &mut &mut CountedEntry| k.count += d.count,
            );
            assert_eq!(got.len(), 1);
        }
        assert_eq!(a.prefix.to_string(), "10.0.0.0/24");
        assert_eq!(a.count, 2);
        // deleted entries are never rewritten
        assert_eq!(b.prefix.to_string(), "10.0.0.128/25");
    }

    #[test]
    fn test_aggregate_prefixes() {
        let prefixes = ["8.8.9.128/25", "8.8.8.0/24", "8.8.9.0/25"]
            .iter()
            .map(|s| Prefix::parse(s).unwrap())
            .collect();
        assert_eq!(
            aggregate_prefixes(prefixes),
            vec![Prefix::parse("8.8.8.0/23").unwrap()]
        );
    }
}
