use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};
use strum::{EnumCount, IntoEnumIterator};

use crate::decompose::Decomposition;
use crate::rounding::RoundingMode;

/// Lays out decompositions one rate per row: the reversed base prices, the rebuilt prices, and
/// whether the input price was reproduced.
pub fn tabulate(decompositions: &[Decomposition], decimal_places: usize) -> Table {
    let mut table = Table::default()
        .with_cols({
            let mut cols = vec![Col::new(
                Styles::default().with(MinWidth(8)).with(HAlign::Right),
            )];
            for _ in 0..2 {
                for mode in RoundingMode::iter() {
                    let styles = Styles::default().with(MinWidth(10)).with(HAlign::Right);
                    cols.push(Col::new(if mode == RoundingMode::Floor {
                        styles.with(Separator(true))
                    } else {
                        styles
                    }));
                }
            }
            cols.push(Col::new(
                Styles::default()
                    .with(Separator(true))
                    .with(MinWidth(8))
                    .with(HAlign::Centred),
            ));
            cols
        })
        .with_row({
            let mut header_cells = vec!["".into(), "Reversed".into()];
            for _ in 1..RoundingMode::COUNT {
                header_cells.push("".into());
            }
            header_cells.push("Rebuilt".into());
            for _ in 1..RoundingMode::COUNT {
                header_cells.push("".into());
            }
            header_cells.push("".into());
            Row::new(Styles::default().with(Header(true)), header_cells)
        })
        .with_row({
            let mut header_cells = vec!["Rate".into()];
            for _ in 0..2 {
                for mode in RoundingMode::iter() {
                    header_cells.push(format!("{mode}").into());
                }
            }
            header_cells.push("Survives".into());
            Row::new(
                Styles::default().with(Header(true)).with(Separator(true)),
                header_cells,
            )
        });

    for decomposition in decompositions {
        let mut row_cells = vec![format!("{}", decomposition.rate).into()];
        for mode in RoundingMode::iter() {
            row_cells.push(format!("{:.decimal_places$}", decomposition.reversed(mode)).into());
        }
        for mode in RoundingMode::iter() {
            row_cells.push(format!("{:.decimal_places$}", decomposition.rebuilt(mode)).into());
        }
        row_cells.push((if decomposition.reproduces_input() { "yes" } else { "no" }).into());
        table.push_row(Row::new(Styles::default(), row_cells));
    }

    table
}
