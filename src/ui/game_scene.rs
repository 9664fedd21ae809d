//! UI rendering for the game screen.

use crate::assets::AssetPack;
use crate::game::TerminalPolicy;
use crate::observer::FrameStats;
use crate::session::Session;
use crate::ui::canvas::rasterize;
use crate::ui::game_common::{
    game_layout, render_game_border, render_info_panel_frame, render_retry_modal,
    render_status_bar,
};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const CONTROLS: &[(&str, &str)] = &[("[Space/Up]", "Flap"), ("[Q]", "Quit")];

/// Render the whole game screen. `assets` is None while loading.
pub fn render_game(
    frame: &mut Frame,
    area: Rect,
    session: &Session<FrameStats>,
    assets: Option<&AssetPack>,
    show_info_panel: bool,
) {
    let layout = game_layout(area, show_info_panel);
    render_game_border(frame, area, " Flapper ", Color::Cyan);

    match assets {
        Some(assets) => render_play_area(frame, layout.content, session, assets),
        None => render_loading(frame, layout.content),
    }
    render_status_bar_content(frame, layout.status_bar, session, assets.is_some());
    if let Some(info) = layout.info_panel {
        render_info_panel(frame, info, session);
    }

    if session.retry_prompt_visible() {
        render_retry_modal(frame, layout.content, "You hit the ground.");
    }
}

/// Rasterize the frame's draw list into the play area.
fn render_play_area(
    frame: &mut Frame,
    area: Rect,
    session: &Session<FrameStats>,
    assets: &AssetPack,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let commands = session.draw_list(assets);
    let canvas = rasterize(
        &commands,
        assets,
        &session.viewport,
        area.width as usize,
        area.height as usize,
    );
    frame.render_widget(Paragraph::new(canvas.to_lines()), area);
}

fn render_loading(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let y = area.y + area.height / 2;
    let text = Paragraph::new(Span::styled(
        "Loading sprites...",
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(text, Rect::new(area.x, y, area.width, 1));
}

fn render_status_bar_content(
    frame: &mut Frame,
    area: Rect,
    session: &Session<FrameStats>,
    ready: bool,
) {
    let state = session.state();
    if !ready {
        render_status_bar(frame, area, "Loading...", Color::DarkGray, CONTROLS);
    } else if state.game_over {
        render_status_bar(
            frame,
            area,
            "Game over!",
            Color::Red,
            &[("[Enter]", "Retry"), ("[Q]", "Quit")],
        );
    } else if state.y_velocity < 0.0 {
        render_status_bar(frame, area, "Rising", Color::Green, CONTROLS);
    } else {
        render_status_bar(frame, area, "Falling", Color::Yellow, CONTROLS);
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &Session<FrameStats>) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let state = session.state();
    let stats = session.observer();
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let policy = match session.physics.terminal_policy {
        TerminalPolicy::EndSession => "end",
        TerminalPolicy::Stall => "stall",
    };

    let lines = vec![
        Line::from(Span::styled(
            " Flight ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Height: ", label),
            Span::styled(format!("{:.0}", state.y_position), value),
        ]),
        Line::from(vec![
            Span::styled(" Speed:  ", label),
            Span::styled(format!("{:+.2}", state.y_velocity), value),
        ]),
        Line::from(vec![
            Span::styled(" Scroll: ", label),
            Span::styled(format!("{:.0}", state.ground_offset), value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" FPS:    ", label),
            Span::styled(format!("{:.0}", stats.fps()), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled(" Frames: ", label),
            Span::styled(format!("{}", stats.frames()), value),
        ]),
        Line::from(vec![
            Span::styled(" Ground: ", label),
            Span::styled(policy, Style::default().fg(Color::Yellow)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
