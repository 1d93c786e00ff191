//! Bounding ranges on cyclic axes.
//!
//! Coverage is split into spans within one period, the largest uncovered gap is found treating
//! the period as a circle, and its complement becomes the bounding range.

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::{domain::Domain, segment::Segment, span::Span};

/// Returns the bounding range of `segments` on a cyclic `domain`, or `None` if there are no
/// segments.
///
/// The range may extend past `domain.max` when the coverage wraps across the seam; its center
/// always lies within the domain.
pub fn cyclic_bounds(
    segments: impl IntoIterator<Item = Segment>,
    domain: &Domain,
) -> Option<Span> {
    let window = domain.span();
    let width = domain.width();

    let spans = segments
        .into_iter()
        .flat_map(|segment| segment.split(window))
        .collect_vec();

    let gap = largest_gap(&spans, width)?;
    let occupied = invert_gap(gap, window);
    let range = normalize_center(occupied, window);

    tracing::trace!(
        spans = spans.len(),
        gap.min,
        gap.max,
        range.min,
        range.max,
        "cyclic bounds"
    );

    Some(range)
}

/// Finds the largest uncovered interval between `spans` on a circle of circumference `width`.
///
/// The spans must lie within one period. The gap across the seam is expressed from the highest
/// covered coordinate to the lowest one shifted by a period. Returns `None` for no spans.
pub fn largest_gap(spans: &[Span], width: f64) -> Option<Span> {
    let sorted = spans
        .iter()
        .sorted_by_key(|v| OrderedFloat(v.min))
        .collect_vec();

    let (first, rest) = sorted.split_first()?;

    let highest = sorted
        .iter()
        .map(|v| v.max)
        .max_by_key(|&v| OrderedFloat(v))?;

    // Overlapping coverage past a full period leaves an empty gap at the seam
    let mut gap = Span::new(highest, (width + first.min).max(highest));

    let mut prev_max = first.max;
    for span in rest {
        let next_min = span.min;
        if next_min > prev_max && next_min - prev_max > gap.length() {
            gap = Span::new(prev_max, next_min);
        }

        prev_max = prev_max.max(span.max);
    }

    Some(gap)
}

/// Converts the largest gap into the occupied range it leaves on the circle formed by `window`.
///
/// A gap reaching past `window.max` wraps, so the range runs from its wrapped end to its start.
/// Otherwise the range starts after the gap and continues to the gap start one period later,
/// possibly past `window.max`.
pub fn invert_gap(gap: Span, window: Span) -> Span {
    let width = window.length();
    if gap.length() > width {
        tracing::warn!(
            gap.min,
            gap.max,
            width,
            "gap exceeds the domain width, collapsing range"
        );
        Span::point(gap.min)
    } else if gap.max > window.max {
        // Endpoints are reordered to absorb rounding near the seam
        Span::ordered(gap.max - width, gap.min)
    } else {
        Span::ordered(gap.max, width + gap.min)
    }
}

/// Shifts `range` back by one period if its center lies outside `window`
pub fn normalize_center(range: Span, window: Span) -> Span {
    if window.contains(range.center()) {
        range
    } else {
        range.translate(-window.length())
    }
}

#[cfg(test)]
mod test {
    use std::iter;

    use super::{cyclic_bounds, invert_gap, largest_gap, normalize_center};
    use crate::{domain::Domain, segment::Segment, span::Span};

    const LONGITUDE: Span = Span::new(-180.0, 180.0);

    fn longitude() -> Domain {
        Domain::cyclic(LONGITUDE).unwrap()
    }

    #[test]
    fn no_spans_no_gap() {
        assert_eq!(largest_gap(&[], 360.0), None);
        assert_eq!(cyclic_bounds(iter::empty(), &longitude()), None);
    }

    #[test]
    fn gap_between_spans() {
        let spans = [Span::point(170.0), Span::point(-170.0)];
        assert_eq!(largest_gap(&spans, 360.0), Some(Span::new(-170.0, 170.0)));
    }

    #[test]
    fn gap_across_seam() {
        let spans = [Span::new(10.0, 20.0), Span::new(-20.0, -10.0)];
        assert_eq!(largest_gap(&spans, 360.0), Some(Span::new(20.0, 340.0)));
    }

    #[test]
    fn overlapping_spans_are_merged() {
        let spans = [
            Span::new(0.0, 50.0),
            Span::new(10.0, 20.0),
            Span::new(30.0, 60.0),
            Span::new(100.0, 110.0),
        ];
        // The wrap candidate 110..360 wins over 60..100
        assert_eq!(largest_gap(&spans, 360.0), Some(Span::new(110.0, 360.0)));
    }

    #[test]
    fn single_span_gap_wraps() {
        let spans = [Span::new(10.0, 20.0)];
        assert_eq!(largest_gap(&spans, 360.0), Some(Span::new(20.0, 370.0)));

        let identical = [Span::new(10.0, 20.0); 3];
        assert_eq!(largest_gap(&identical, 360.0), Some(Span::new(20.0, 370.0)));
    }

    #[test]
    fn full_coverage_has_empty_gap() {
        let gap = largest_gap(&[LONGITUDE], 360.0).unwrap();
        assert_eq!(gap.length(), 0.0);
    }

    #[test]
    fn invert_branches() {
        assert_eq!(invert_gap(Span::new(0.0, 400.0), LONGITUDE), Span::point(0.0));
        assert_eq!(invert_gap(Span::new(20.0, 370.0), LONGITUDE), Span::new(10.0, 20.0));
        assert_eq!(invert_gap(Span::new(-10.0, 340.0), LONGITUDE), Span::new(-20.0, -10.0));
        assert_eq!(invert_gap(Span::new(-170.0, 170.0), LONGITUDE), Span::new(170.0, 190.0));
    }

    #[test]
    fn gap_and_range_fill_the_period() {
        for gap in [
            Span::new(-170.0, 170.0),
            Span::new(20.0, 370.0),
            Span::new(180.0, 180.0),
        ] {
            let range = invert_gap(gap, LONGITUDE);
            assert_eq!(gap.length() + range.length(), 360.0);
        }
    }

    #[test]
    fn normalize_shifts_back_one_period() {
        assert_eq!(
            normalize_center(Span::new(340.0, 350.0), LONGITUDE),
            Span::new(-20.0, -10.0)
        );
        assert_eq!(
            normalize_center(Span::new(170.0, 190.0), LONGITUDE),
            Span::new(170.0, 190.0)
        );
    }

    #[test]
    fn points_across_antimeridian() {
        let range = cyclic_bounds(
            [Segment::point(170.0), Segment::point(-170.0)],
            &longitude(),
        );
        assert_eq!(range, Some(Span::new(170.0, 190.0)));
    }

    #[test]
    fn full_domain_segment() {
        let range = cyclic_bounds([Segment::new(-180.0, 180.0)], &longitude());
        assert_eq!(range, Some(LONGITUDE));
    }

    #[test]
    fn coverage_west_of_zero() {
        let range = cyclic_bounds([Segment::new(-20.0, -10.0)], &longitude());
        assert_eq!(range, Some(Span::new(-20.0, -10.0)));
    }

    #[test]
    fn wrapped_world_coordinates() {
        let domain = Domain::cyclic(Span::new(0.0, 256.0)).unwrap();
        let range = cyclic_bounds([Segment::new(250.0, 6.0), Segment::point(2.0)], &domain);
        assert_eq!(range, Some(Span::new(250.0, 262.0)));
    }

    #[test]
    fn offset_window() {
        let domain = Domain::cyclic(Span::new(100.0, 200.0)).unwrap();

        let range = cyclic_bounds(
            [Segment::new(101.0, 102.0), Segment::new(150.0, 199.0)],
            &domain,
        );
        assert_eq!(range, Some(Span::new(150.0, 202.0)));

        let range = cyclic_bounds([Segment::new(110.0, 120.0)], &domain);
        assert_eq!(range, Some(Span::new(110.0, 120.0)));

        let range = cyclic_bounds([Segment::new(190.0, 110.0)], &domain);
        assert_eq!(range, Some(Span::new(190.0, 210.0)));

        let range = cyclic_bounds([Segment::new(100.0, 200.0)], &domain);
        assert_eq!(range, Some(Span::new(100.0, 200.0)));
    }

    #[test]
    fn range_center_stays_in_window() {
        let domain = longitude();
        let cases = [
            vec![Segment::new(100.0, 120.0), Segment::new(-120.0, -100.0)],
            vec![Segment::new(170.0, -150.0)],
            vec![Segment::point(-179.0), Segment::point(179.0), Segment::point(0.0)],
            vec![Segment::new(0.0, 90.0), Segment::new(90.0, 180.0)],
        ];

        for segments in cases {
            let range = cyclic_bounds(segments.iter().copied(), &domain).unwrap();
            assert!(LONGITUDE.contains(range.center()), "{range:?}");

            // Every endpoint is covered by some copy of the range
            for value in segments.iter().flat_map(|v| [v.start, v.end]) {
                assert!(
                    [-360.0, 0.0, 360.0]
                        .iter()
                        .any(|offset| range.contains(value + offset)),
                    "{value} outside {range:?}"
                );
            }
        }
    }
}
