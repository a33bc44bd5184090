use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Indexed(62);
    pub const TEXT_BRIGHT: Color = Color::Indexed(230);
    pub const TEXT: Color = Color::Indexed(15);
    pub const TEXT_DIM: Color = Color::Indexed(243);
    pub const TAB_INACTIVE_BG: Color = Color::Indexed(240);
    pub const TAB_INACTIVE_FG: Color = Color::Indexed(250);
    pub const MODAL_BG: Color = Color::Indexed(235);

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_BRIGHT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_active() -> Style {
        Style::default()
            .fg(Self::TEXT_BRIGHT)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive() -> Style {
        Style::default()
            .fg(Self::TAB_INACTIVE_FG)
            .bg(Self::TAB_INACTIVE_BG)
    }

    pub fn selected() -> Style {
        Style::default()
            .fg(Self::TEXT_BRIGHT)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn item() -> Style {
        Style::default().fg(Self::TEXT)
    }

    pub fn item_done() -> Style {
        Style::default()
            .fg(Self::TEXT_DIM)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn timer_name() -> Style {
        Style::default().fg(Self::TEXT).add_modifier(Modifier::BOLD)
    }

    pub fn timer_status(running: bool) -> Style {
        Style::default().fg(if running { Self::ACCENT } else { Self::TEXT_DIM })
    }

    pub fn timer_clock(running: bool) -> Style {
        Self::timer_status(running).add_modifier(Modifier::BOLD)
    }

    pub fn hint() -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    pub fn help_key() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    pub fn modal() -> Style {
        Style::default().fg(Self::TEXT_BRIGHT).bg(Self::MODAL_BG)
    }

    pub fn modal_border() -> Style {
        Style::default().fg(Self::ACCENT).bg(Self::MODAL_BG)
    }
}
