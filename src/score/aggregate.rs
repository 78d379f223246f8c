use crate::model::target::{TargetInfo, TargetKind};

/// Cumulative map statistics up to and including one target.
///
/// Every field is monotonically non-decreasing along the sequence.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PrefixAggregate {
    pub n_circles: u32,
    pub n_sliders: u32,
    pub n_objects: u32,
    /// Highest combo achievable up to this target.
    pub max_combo: u32,
}

impl PrefixAggregate {
    /// Compute the prefix table of the given targets.
    pub(crate) fn table(targets: &[TargetInfo]) -> Box<[Self]> {
        targets
            .iter()
            .scan(Self::default(), |curr, target| {
                match target.kind {
                    TargetKind::Circle => curr.n_circles += 1,
                    TargetKind::Slider => {
                        curr.n_sliders += 1;
                        curr.max_combo += target.score_points as u32;
                    }
                    TargetKind::Spinner => {}
                }

                curr.max_combo += 1;
                curr.n_objects += 1;

                Some(*curr)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rosu_map::util::Pos;

    use super::*;

    fn info(index: usize, kind: TargetKind, score_points: usize) -> TargetInfo {
        TargetInfo {
            index,
            kind,
            activation_time: 0.0,
            start_time: 0.0,
            end_time: 0.0,
            position: Pos::default(),
            new_combo: false,
            score_points,
        }
    }

    #[test]
    fn counts_per_kind() {
        let targets = [
            info(0, TargetKind::Circle, 0),
            info(1, TargetKind::Slider, 3),
            info(2, TargetKind::Spinner, 0),
            info(3, TargetKind::Circle, 0),
        ];

        let table = PrefixAggregate::table(&targets);

        assert_eq!(
            table[1],
            PrefixAggregate {
                n_circles: 1,
                n_sliders: 1,
                n_objects: 2,
                max_combo: 5,
            }
        );

        assert_eq!(
            table[3],
            PrefixAggregate {
                n_circles: 2,
                n_sliders: 1,
                n_objects: 4,
                max_combo: 7,
            }
        );
    }

    #[test]
    fn monotonic() {
        let targets: Vec<_> = (0..20)
            .map(|i| {
                let kind = match i % 3 {
                    0 => TargetKind::Circle,
                    1 => TargetKind::Slider,
                    _ => TargetKind::Spinner,
                };

                info(i, kind, i % 4)
            })
            .collect();

        let table = PrefixAggregate::table(&targets);

        for pair in table.windows(2) {
            let [prev, next] = pair else { unreachable!() };

            assert!(prev.n_circles <= next.n_circles);
            assert!(prev.n_sliders <= next.n_sliders);
            assert!(prev.n_objects < next.n_objects);
            assert!(prev.max_combo < next.max_combo);
        }
    }
}
