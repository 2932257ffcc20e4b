// SPDX-License-Identifier: MPL-2.0
//! Tabular listing with loading and empty states.
//!
//! ```
//! use pet_manager::ui::data_table::{Body, DataTable, TableRow};
//!
//! let table: DataTable<'_, ()> = DataTable::new(["ID", "Customer"])
//!     .push(TableRow::new(["#1", "Juan Pérez"]));
//! assert_eq!(table.body(), Body::Rows(1));
//! ```

use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{mouse_area, Column, Container, Row, Text};
use iced::{alignment, mouse, Color, Element, Length};

pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "No data available";

/// A text cell, optionally tinted (e.g. a status column).
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    text: String,
    color: Option<Color>,
}

impl Cell {
    #[must_use]
    pub fn colored(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self { text, color: None }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::from(text.to_owned())
    }
}

/// One table row: cells, an optional trailing widget, an optional click message.
pub struct TableRow<'a, Message> {
    cells: Vec<Cell>,
    trailing: Option<Element<'a, Message>>,
    on_press: Option<Message>,
}

impl<'a, Message> TableRow<'a, Message> {
    pub fn new<C: Into<Cell>>(cells: impl IntoIterator<Item = C>) -> Self {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            trailing: None,
            on_press: None,
        }
    }

    /// Widget shown after the cells, such as a delete button.
    #[must_use]
    pub fn trailing(mut self, element: impl Into<Element<'a, Message>>) -> Self {
        self.trailing = Some(element.into());
        self
    }

    /// Message published when the row is clicked.
    #[must_use]
    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }
}

/// What the table body currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    Loading,
    Empty,
    Rows(usize),
}

pub struct DataTable<'a, Message> {
    headers: Vec<String>,
    rows: Vec<TableRow<'a, Message>>,
    loading: bool,
    has_trailing_column: bool,
}

impl<'a, Message: Clone + 'a> DataTable<'a, Message> {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            loading: false,
            has_trailing_column: false,
        }
    }

    #[must_use]
    pub fn push(mut self, row: TableRow<'a, Message>) -> Self {
        self.has_trailing_column |= row.trailing.is_some();
        self.rows.push(row);
        self
    }

    #[must_use]
    pub fn extend(self, rows: impl IntoIterator<Item = TableRow<'a, Message>>) -> Self {
        rows.into_iter().fold(self, Self::push)
    }

    /// While loading, rows are hidden behind a placeholder.
    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    #[must_use]
    pub fn body(&self) -> Body {
        if self.loading {
            Body::Loading
        } else if self.rows.is_empty() {
            Body::Empty
        } else {
            Body::Rows(self.rows.len())
        }
    }

    pub fn view(self) -> Element<'a, Message> {
        let body = self.body();
        let has_trailing = self.has_trailing_column;

        let header = self.headers.into_iter().fold(row_layout(), |row, title| {
            row.push(
                Text::new(title)
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400)
                    .width(Length::FillPortion(2)),
            )
        });
        let header = if has_trailing {
            header.push(Container::new(Text::new("")).width(Length::FillPortion(1)))
        } else {
            header
        };

        let column = Column::new().spacing(spacing::XXS).push(header);

        match body {
            Body::Loading => column.push(placeholder(LOADING_TEXT)).into(),
            Body::Empty => column.push(placeholder(EMPTY_TEXT)).into(),
            Body::Rows(_) => self
                .rows
                .into_iter()
                .fold(column, |column, row| column.push(view_row(row, has_trailing)))
                .into(),
        }
    }
}

fn row_layout<'a, Message: 'a>() -> Row<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .padding([spacing::XXS, 0.0])
}

fn view_row<'a, Message: Clone + 'a>(
    row: TableRow<'a, Message>,
    has_trailing: bool,
) -> Element<'a, Message> {
    let mut content = row.cells.into_iter().fold(row_layout(), |content, cell| {
        let text = Text::new(cell.text)
            .size(typography::BODY)
            .width(Length::FillPortion(2));
        content.push(match cell.color {
            Some(color) => text.color(color),
            None => text,
        })
    });

    if has_trailing {
        let trailing: Element<'a, Message> = match row.trailing {
            Some(trailing) => trailing,
            None => Text::new("").into(),
        };
        content = content.push(
            Container::new(trailing)
                .width(Length::FillPortion(1))
                .align_x(alignment::Horizontal::Right),
        );
    }

    match row.on_press {
        Some(message) => mouse_area(content)
            .on_press(message)
            .interaction(mouse::Interaction::Pointer)
            .into(),
        None => content.into(),
    }
}

fn placeholder<'a, Message: 'a>(label: &'static str) -> Element<'a, Message> {
    Container::new(
        Text::new(label)
            .size(typography::BODY)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .align_x(alignment::Horizontal::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Clicked(u32),
    }

    fn table() -> DataTable<'static, Msg> {
        DataTable::new(["ID", "Customer"])
    }

    #[test]
    fn table_without_rows_is_empty() {
        assert_eq!(table().body(), Body::Empty);
    }

    #[test]
    fn loading_wins_over_rows() {
        let table = table()
            .push(TableRow::new(["#1", "Juan Pérez"]))
            .loading(true);
        assert_eq!(table.body(), Body::Loading);
        assert_eq!(table.loading(false).body(), Body::Rows(1));
    }

    #[test]
    fn rows_are_counted() {
        let table = table().extend((1..=3).map(|id| {
            TableRow::new([format!("#{id}"), "Someone".to_string()]).on_press(Msg::Clicked(id))
        }));
        assert_eq!(table.body(), Body::Rows(3));
    }

    #[test]
    fn clickable_row_keeps_its_message() {
        let row: TableRow<'_, Msg> = TableRow::new(["#7"]).on_press(Msg::Clicked(7));
        assert_eq!(row.on_press, Some(Msg::Clicked(7)));
        assert_eq!(row.cells[0].text(), "#7");
    }

    #[test]
    fn trailing_widget_adds_a_column() {
        let table = table().push(TableRow::new(["#1", "A"]).trailing(Text::new("x")));
        assert!(table.has_trailing_column);
    }

    #[test]
    fn colored_cell_carries_its_tint() {
        let cell = Cell::colored("Pending", palette::WARNING_500);
        assert_eq!(cell.color, Some(palette::WARNING_500));
        assert_eq!(Cell::from("plain").color, None);
    }
}
