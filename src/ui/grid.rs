/// Thumbnail grid and page selector
use iced::widget::{button, column, container, image, mouse_area, scrollable, text, Column, Row};
use iced::{Alignment, Element, Length};

use crate::state::gallery::Cell;
use crate::thumbs::extract::{THUMBNAIL_HEIGHT, THUMBNAIL_WIDTH};
use crate::Message;

/// Cell frame around the 160x90 thumbnail
const CELL_WIDTH: f32 = 170.0;
const CELL_HEIGHT: f32 = 100.0;

/// Build a scrollable grid of the page's cells, `columns` per row.
/// Left click opens the video, right click shows its details.
pub fn thumbnail_grid<'a>(cells: &'a [Cell], columns: usize) -> Element<'a, Message> {
    let rows = cells.chunks(columns.max(1)).map(|chunk| -> Element<'a, Message> {
        Row::with_children(chunk.iter().map(thumbnail_cell))
            .spacing(10)
            .into()
    });

    let grid = Column::with_children(rows)
        .spacing(10)
        .padding(10)
        .width(Length::Fill)
        .align_x(Alignment::Center);

    scrollable(grid)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn thumbnail_cell(cell: &Cell) -> Element<'_, Message> {
    let content: Element<'_, Message> = match &cell.thumbnail {
        Some(thumb) => image(thumb.handle.clone())
            .width(Length::Fixed(thumb.width.min(THUMBNAIL_WIDTH) as f32))
            .height(Length::Fixed(thumb.height.min(THUMBNAIL_HEIGHT) as f32))
            .into(),
        // Placeholder keeps the grid shape when no frame could be extracted
        None => column![
            text("No preview").size(12),
            text(cell.entry.file_name()).size(10),
        ]
        .spacing(4)
        .align_x(Alignment::Center)
        .into(),
    };

    let framed = container(content)
        .center_x(Length::Fixed(CELL_WIDTH))
        .center_y(Length::Fixed(CELL_HEIGHT))
        .style(container::bordered_box);

    mouse_area(framed)
        .on_press(Message::OpenVideo(cell.entry.path.clone()))
        .on_right_press(Message::ShowDetails(cell.entry.path.clone()))
        .into()
}

/// One numbered button per page; the current page is highlighted
pub fn page_selector<'a>(page_count: usize, current: usize) -> Element<'a, Message> {
    let buttons = (0..page_count).map(|page| -> Element<'a, Message> {
        let style = if page == current {
            button::primary
        } else {
            button::secondary
        };

        button(text((page + 1).to_string()))
            .on_press(Message::ChangePage(page))
            .style(style)
            .padding([4, 10])
            .into()
    });

    Row::with_children(buttons).spacing(4).padding(5).into()
}
