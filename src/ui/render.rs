use crate::ui::app::{App, EditorField, FocusPane, SidebarTab};
use crate::ui::routes::{Route, EXPLORE_ITEMS};
use crate::ui::theme::{Theme, ThemeMode};
use crate::viz::{catalog, Cell};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Width of one array box including its borders.
const CELL_WIDTH: usize = 6;

pub fn render(frame: &mut Frame, app: &App) {
    let theme = app.theme();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
        frame.area(),
    );

    // Main layout: Header + Body + Footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, main_chunks[0]);

    // Split body into sidebar and page content
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(0)])
        .split(main_chunks[1]);

    render_sidebar(frame, app, body_chunks[0]);

    match &app.route {
        Route::Home => render_home(frame, app, body_chunks[1]),
        Route::ArrayOperations => render_operations(frame, app, body_chunks[1]),
        Route::ArrayEditor => render_editor(frame, app, body_chunks[1]),
        Route::Placeholder(path) => render_placeholder(frame, app, path, body_chunks[1]),
    }

    render_footer(frame, app, main_chunks[2]);

    if app.show_info {
        render_info(frame, theme);
    }
}

fn border_style(theme: &Theme, focused: bool) -> Style {
    if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.fg_dim)
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let mode_icon = match app.theme_mode {
        ThemeMode::Dark => "☾",
        ThemeMode::Light => "☀",
    };

    let header_text = vec![Line::from(vec![
        Span::styled(
            "  DataViz Explorer  ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{mode_icon} {} ", theme.name),
            Style::default().fg(theme.fg_dim),
        ),
        Span::styled(app.route.path().to_string(), Style::default().fg(theme.fg)),
    ])];

    let header = Paragraph::new(header_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );

    frame.render_widget(header, area);
}

fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let focused = app.focus == FocusPane::Sidebar;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Explore ")
        .border_style(border_style(theme, focused))
        .style(Style::default().bg(theme.sidebar_bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(EXPLORE_ITEMS.len() as u16 + 1), // Explore
            Constraint::Length(2),                              // Tabs
            Constraint::Min(0),                                 // Links
        ])
        .split(inner);

    let explore: Vec<ListItem> = EXPLORE_ITEMS
        .iter()
        .map(|item| ListItem::new(format!(" • {item}")).style(Style::default().fg(theme.fg_dim)))
        .collect();
    frame.render_widget(List::new(explore), chunks[0]);

    let tab_style = |tab: SidebarTab| {
        if app.sidebar_tab == tab {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.fg_dim)
        }
    };
    let tabs = Paragraph::new(vec![
        Line::from(Span::styled("Visualize", Style::default().fg(theme.fg_dim))),
        Line::from(vec![
            Span::raw(" "),
            Span::styled("Structures", tab_style(SidebarTab::Structures)),
            Span::raw("  "),
            Span::styled("Algorithms", tab_style(SidebarTab::Algorithms)),
        ]),
    ]);
    frame.render_widget(tabs, chunks[1]);

    let links: Vec<ListItem> = app
        .sidebar_items()
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let is_selected = focused && i == app.sidebar_index;
            let is_active = item.path == app.route.path();
            let style = if is_selected {
                Style::default()
                    .fg(theme.fg)
                    .bg(theme.selection_bg)
                    .add_modifier(Modifier::BOLD)
            } else if is_active {
                Style::default().fg(theme.accent)
            } else {
                Style::default().fg(theme.fg)
            };
            ListItem::new(format!(" › {}", item.label)).style(style)
        })
        .collect();
    frame.render_widget(List::new(links), chunks[2]);
}

fn render_home(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let text = vec![
        Line::from(Span::styled(
            "Welcome to DataViz Explorer",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Pick a data structure in the sidebar to see its operations animated."),
        Line::from(""),
        Line::from("Only Array is interactive for now; other entries are placeholders."),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", app.route.title()))
                .border_style(border_style(theme, false)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_placeholder(frame: &mut Frame, app: &App, path: &str, area: Rect) {
    let theme = app.theme();
    let text = vec![
        Line::from(Span::styled(
            path.to_string(),
            Style::default().fg(theme.highlight),
        )),
        Line::from(""),
        Line::from("This visualization has not been built yet."),
    ];
    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", app.route.title()))
            .border_style(border_style(theme, false)),
    );
    frame.render_widget(paragraph, area);
}

fn render_operations(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let focused = app.focus == FocusPane::Content;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Array
            Constraint::Min(7),    // Menu + code
            Constraint::Length(3), // Status
        ])
        .split(area);

    render_cells(frame, theme, &app.engine.cells(), app.route.title(), chunks[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(0)])
        .split(chunks[1]);

    let items: Vec<ListItem> = catalog()
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let style = if focused && i == app.operation_index {
                Style::default()
                    .fg(theme.fg)
                    .bg(theme.selection_bg)
                    .add_modifier(Modifier::BOLD)
            } else if app.selected_operation == Some(record.operation) {
                Style::default().fg(theme.accent)
            } else {
                Style::default().fg(theme.fg)
            };
            ListItem::new(format!(" {}. {}", i + 1, record.name)).style(style)
        })
        .collect();
    let menu = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Operations ")
            .border_style(border_style(theme, focused)),
    );
    frame.render_widget(menu, middle[0]);

    let code = match app.selected_operation {
        Some(operation) => operation
            .code()
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(theme.success))))
            .collect(),
        None => vec![Line::from(Span::styled(
            "Select an operation to see its code",
            Style::default().fg(theme.fg_dim),
        ))],
    };
    let code_title = app
        .selected_operation
        .map(|op| format!(" {op} "))
        .unwrap_or_else(|| " Code ".to_string());
    let snippet = Paragraph::new(code)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(code_title)
                .border_style(border_style(theme, false)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(snippet, middle[1]);

    render_status(frame, app, chunks[2]);
}

fn render_editor(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let focused = app.focus == FocusPane::Content;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Array
            Constraint::Length(3), // Add input
            Constraint::Length(3), // Search input
            Constraint::Length(3), // Status
            Constraint::Min(0),
        ])
        .split(area);

    render_cells(frame, theme, &app.editor.cells(), app.route.title(), chunks[0]);

    let input = |title: &'static str, value: &str, field: EditorField| {
        let active = focused && app.editor_field == field;
        let text = if value.is_empty() && !active {
            Span::styled("Enter a number", Style::default().fg(theme.fg_dim))
        } else if active {
            Span::styled(format!("{value}▏"), Style::default().fg(theme.fg))
        } else {
            Span::styled(value.to_string(), Style::default().fg(theme.fg))
        };
        Paragraph::new(Line::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border_style(theme, active)),
        )
    };

    frame.render_widget(
        input(" Add [Enter] · Remove last [Del] ", &app.add_input, EditorField::Add),
        chunks[1],
    );
    frame.render_widget(
        input(" Search [Enter] ", &app.search_input, EditorField::Search),
        chunks[2],
    );

    render_status(frame, app, chunks[3]);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let text = app.status.as_deref().unwrap_or("");
    let status = Paragraph::new(Span::styled(text.to_string(), Style::default().fg(theme.fg)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Status ")
                .border_style(border_style(theme, false)),
        );
    frame.render_widget(status, area);
}

/// Render array elements as a row of boxes with their indices underneath.
fn render_cells(frame: &mut Frame, theme: &Theme, cells: &[Cell], title: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .border_style(border_style(theme, false));

    let lines = if cells.is_empty() {
        vec![Line::from(Span::styled(
            "(empty)",
            Style::default().fg(theme.fg_dim),
        ))]
    } else {
        cell_lines(cells, theme)
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Build the four text rows (top border, value, bottom border, index) for a
/// row of cells.
pub fn cell_lines(cells: &[Cell], theme: &Theme) -> Vec<Line<'static>> {
    let inner = CELL_WIDTH - 2;
    let mut top = Vec::with_capacity(cells.len());
    let mut middle = Vec::with_capacity(cells.len());
    let mut bottom = Vec::with_capacity(cells.len());
    let mut index = Vec::with_capacity(cells.len());

    for (i, cell) in cells.iter().enumerate() {
        let style = if cell.highlighted {
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else if cell.is_new {
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg)
        };

        let (tl, tr, bl, br, h, v) = if cell.highlighted {
            ('╔', '╗', '╚', '╝', "═", '║')
        } else {
            ('┌', '┐', '└', '┘', "─", '│')
        };

        top.push(Span::styled(format!("{tl}{}{tr}", h.repeat(inner)), style));
        middle.push(Span::styled(
            format!("{v}{:^inner$}{v}", cell.value),
            style,
        ));
        bottom.push(Span::styled(format!("{bl}{}{br}", h.repeat(inner)), style));
        index.push(Span::styled(
            format!("{:^width$}", i, width = CELL_WIDTH),
            Style::default().fg(theme.fg_dim),
        ));
    }

    vec![
        Line::from(top),
        Line::from(middle),
        Line::from(bottom),
        Line::from(index),
    ]
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match (app.focus, &app.route) {
        (FocusPane::Content, Route::ArrayOperations) => {
            "[↑↓/jk] Select  [Enter/1-5] Run  [e] Editor  [Esc] Sidebar  [t] Theme  [i] Info  [q] Quit"
        }
        (FocusPane::Content, Route::ArrayEditor) => {
            "[0-9] Type  [Enter] Submit  [Del] Remove last  [Tab] Next field  [Esc] Sidebar"
        }
        _ => "[↑↓/jk] Navigate  [←→/hl] Tab  [Enter] Open  [Tab] Content  [t] Theme  [i] Info  [q] Quit",
    };

    let footer = Paragraph::new(help_text)
        .style(Style::default().fg(app.theme().fg_dim))
        .block(Block::default());

    frame.render_widget(footer, area);
}

fn render_info(frame: &mut Frame, theme: &Theme) {
    let area = centered_rect(60, 60, frame.area());
    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("{k:<12}"), Style::default().fg(theme.accent)),
            Span::raw(desc),
        ])
    };

    let text = vec![
        Line::from(Span::styled(
            "Key Bindings",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        key("j/k ↑↓", "Move selection"),
        key("h/l ←→", "Switch Structures / Algorithms"),
        key("Enter", "Open link / run operation / submit input"),
        key("1-5", "Run an operation directly"),
        key("e", "Open the array editor"),
        key("Del", "Remove the last element (editor)"),
        key("Tab", "Switch focus"),
        key("Esc", "Back to sidebar"),
        key("t", "Toggle dark / light theme"),
        key("i", "Close this window"),
        key("q", "Quit"),
    ];

    let modal = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Info ")
                .border_style(Style::default().fg(theme.accent)),
        )
        .style(Style::default().bg(theme.bg).fg(theme.fg));

    frame.render_widget(Clear, area);
    frame.render_widget(modal, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
