use glam::{Vec2, vec2};
use smallvec::SmallVec;

use crate::layout::Rect;
use crate::scene::NodeId;
use crate::style::{Align, Flex, FlexDir, Frame, Justify, SizeMode};

struct Item {
    id: NodeId,
    main: f32,
    cross: f32,
    fill: bool,
    stretch: bool,
}

// (start, end) ranges into the item sequence; wrap packs in order, so every
// line is contiguous.
type Lines = SmallVec<[(usize, usize); 4]>;

/// Position `items` (already filtered to visible children with frames)
/// inside `bounds` per the container's flex block. Returns one absolute rect
/// per item, in input order modulo `reverse`.
pub(crate) fn place(flex: &Flex, items: &[(NodeId, Frame)], bounds: Rect) -> Vec<(NodeId, Rect)> {
    if items.is_empty() {
        return Vec::new();
    }

    debug_assert!(flex.spacing >= 0.0, "negative flex spacing");
    let spacing = flex.spacing.max(0.0);

    let horizontal = flex.dir == FlexDir::Row;
    let main_of = |v: Vec2| if horizontal { v.x } else { v.y };
    let cross_of = |v: Vec2| if horizontal { v.y } else { v.x };
    let axes = |main: f32, cross: f32| {
        if horizontal {
            vec2(main, cross)
        } else {
            vec2(cross, main)
        }
    };

    let container_main = main_of(bounds.size).max(0.0);
    let container_cross = cross_of(bounds.size).max(0.0);

    let mut resolved: Vec<Item> = Vec::with_capacity(items.len());
    let mut push = |&(id, frame): &(NodeId, Frame)| {
        let main_mode = if horizontal {
            frame.width_mode
        } else {
            frame.height_mode
        };
        let cross_mode = if horizontal {
            frame.height_mode
        } else {
            frame.width_mode
        };
        let main = match main_mode {
            SizeMode::Fixed => main_of(frame.size).max(0.0),
            SizeMode::Percent => (main_of(frame.size) / 100.0 * container_main).max(0.0),
            SizeMode::Fill => 0.0,
        };
        let cross = match cross_mode {
            SizeMode::Fixed => cross_of(frame.size).max(0.0),
            SizeMode::Percent => (cross_of(frame.size) / 100.0 * container_cross).max(0.0),
            SizeMode::Fill => 0.0,
        };
        resolved.push(Item {
            id,
            main,
            cross,
            fill: main_mode == SizeMode::Fill,
            stretch: cross_mode == SizeMode::Fill,
        });
    };
    if flex.reverse {
        items.iter().rev().for_each(&mut push);
    } else {
        items.iter().for_each(&mut push);
    }

    let lines = break_lines(&resolved, flex.wrap, container_main, spacing);

    let mut out = Vec::with_capacity(resolved.len());
    let mut line_pos = 0.0;
    for (index, &(start, end)) in lines.iter().enumerate() {
        let line = &resolved[start..end];
        let count = line.len();

        let fixed_total: f32 = line.iter().map(|i| i.main).sum::<f32>()
            + spacing * count.saturating_sub(1) as f32;
        let remaining = (container_main - fixed_total).max(0.0);
        let fills = line.iter().filter(|i| i.fill).count();

        // Fill participants split leftover space equally; with none left
        // over, distribution modes degrade to plain packing.
        let (fill_extent, free) = if fills > 0 {
            (remaining / fills as f32, 0.0)
        } else {
            (0.0, remaining)
        };

        let (lead, gap) = match flex.justify {
            Justify::Start => (0.0, spacing),
            Justify::Center => (free / 2.0, spacing),
            Justify::End => (free, spacing),
            Justify::SpaceBetween if count > 1 => (0.0, spacing + free / (count - 1) as f32),
            Justify::SpaceBetween => (0.0, spacing),
            Justify::SpaceAround => {
                let unit = free / count as f32;
                (unit / 2.0, spacing + unit)
            }
            Justify::SpaceEvenly => {
                let unit = free / (count + 1) as f32;
                (unit, spacing + unit)
            }
        };

        // A line's cross extent is the max of its members; without wrap the
        // container's full cross extent is the line.
        let line_cross = if flex.wrap {
            line.iter().map(|i| i.cross).fold(0.0_f32, f32::max)
        } else {
            container_cross
        };

        let mut cursor = lead;
        for item in line {
            let main_extent = if item.fill { fill_extent } else { item.main };
            let cross_extent = if item.stretch { line_cross } else { item.cross };
            let cross_offset = match flex.align {
                Align::Start => 0.0,
                Align::Center => (line_cross - cross_extent).max(0.0) / 2.0,
                Align::End => (line_cross - cross_extent).max(0.0),
            };
            let origin = bounds.origin + axes(cursor, line_pos + cross_offset);
            out.push((item.id, Rect::new(origin, axes(main_extent, cross_extent))));
            cursor += main_extent + gap;
        }

        line_pos += line_cross;
        if index + 1 < lines.len() {
            line_pos += spacing;
        }
    }

    out
}

/// Greedy packing: a child stays on the current line while the running total
/// plus spacing plus its extent still fits; the first child of a line always
/// fits, however large.
fn break_lines(items: &[Item], wrap: bool, container_main: f32, spacing: f32) -> Lines {
    let mut lines = Lines::new();
    if !wrap {
        lines.push((0, items.len()));
        return lines;
    }

    let mut start = 0;
    let mut running = 0.0;
    for (index, item) in items.iter().enumerate() {
        if index == start {
            running = item.main;
            continue;
        }
        let candidate = running + spacing + item.main;
        if candidate <= container_main {
            running = candidate;
        } else {
            lines.push((start, index));
            start = index;
            running = item.main;
        }
    }
    lines.push((start, items.len()));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::NodeId;
    use glam::vec2;

    fn fixed_items(sizes: &[(f32, f32)]) -> Vec<(NodeId, Frame)> {
        sizes
            .iter()
            .enumerate()
            .map(|(i, &(w, h))| (NodeId(i as u32), Frame::fixed(w, h)))
            .collect()
    }

    #[test]
    fn single_line_ignores_overflow_without_wrap() {
        let items = fixed_items(&[(200.0, 50.0), (200.0, 50.0), (200.0, 50.0)]);
        let bounds = Rect::new(Vec2::ZERO, vec2(300.0, 100.0));
        let placed = place(&Flex::row(), &items, bounds);
        // All three on one line, marching past the right edge.
        assert_eq!(placed[0].1.origin, vec2(0.0, 0.0));
        assert_eq!(placed[1].1.origin, vec2(200.0, 0.0));
        assert_eq!(placed[2].1.origin, vec2(400.0, 0.0));
    }

    #[test]
    fn wrap_starts_a_new_line_past_the_container_edge() {
        let items = fixed_items(&[(100.0, 50.0), (100.0, 50.0), (100.0, 50.0)]);
        let bounds = Rect::new(Vec2::ZERO, vec2(300.0, 200.0));
        let flex = Flex::row().spacing(10.0).wrap(true);
        let placed = place(&flex, &items, bounds);
        assert_eq!(placed[0].1.origin, vec2(0.0, 0.0));
        assert_eq!(placed[1].1.origin, vec2(110.0, 0.0));
        assert_eq!(placed[2].1.origin, vec2(0.0, 60.0));
    }

    #[test]
    fn oversized_child_still_gets_its_own_line() {
        let items = fixed_items(&[(500.0, 20.0), (100.0, 20.0)]);
        let bounds = Rect::new(Vec2::ZERO, vec2(300.0, 100.0));
        let flex = Flex::row().wrap(true);
        let placed = place(&flex, &items, bounds);
        assert_eq!(placed[0].1.origin, vec2(0.0, 0.0));
        assert_eq!(placed[0].1.size, vec2(500.0, 20.0));
        assert_eq!(placed[1].1.origin, vec2(0.0, 20.0));
    }

    #[test]
    fn reverse_flips_traversal_order() {
        let items = fixed_items(&[(100.0, 50.0), (200.0, 50.0)]);
        let bounds = Rect::new(Vec2::ZERO, vec2(600.0, 100.0));
        let placed = place(&Flex::row().reverse(true), &items, bounds);
        // Second-authored child comes first.
        assert_eq!(placed[0].0, NodeId(1));
        assert_eq!(placed[0].1.origin, vec2(0.0, 0.0));
        assert_eq!(placed[1].0, NodeId(0));
        assert_eq!(placed[1].1.origin, vec2(200.0, 0.0));
    }

    #[test]
    fn zero_space_never_divides_by_zero() {
        let items = fixed_items(&[(100.0, 50.0), (100.0, 50.0)]);
        let bounds = Rect::new(Vec2::ZERO, Vec2::ZERO);
        for justify in [
            Justify::Start,
            Justify::Center,
            Justify::End,
            Justify::SpaceBetween,
            Justify::SpaceAround,
            Justify::SpaceEvenly,
        ] {
            let placed = place(&Flex::row().justify(justify), &items, bounds);
            for (_, rect) in &placed {
                assert!(rect.origin.x.is_finite());
                assert!(rect.size.x.is_finite());
            }
        }
    }
}
