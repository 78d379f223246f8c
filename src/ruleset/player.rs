use rosu_map::util::Pos;

use crate::{model::difficulty::Difficulty, model::target::PlayerId};

/// Who drives a cursor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorKind {
    /// Live input.
    #[default]
    Human,
    /// Recorded input.
    Replay,
    /// Generated movement. Click edges are not derived from button state,
    /// targets are expected to judge such cursors on their own.
    Auto,
}

impl CursorKind {
    /// Whether click edges are derived from the cursor's buttons.
    pub const fn uses_buttons(self) -> bool {
        matches!(self, Self::Human | Self::Replay)
    }
}

/// The pair of gameplay buttons.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Buttons {
    pub left: bool,
    pub right: bool,
}

impl Buttons {
    pub const NONE: Self = Self {
        left: false,
        right: false,
    };

    pub const fn new(left: bool, right: bool) -> Self {
        Self { left, right }
    }

    pub const fn both_released(self) -> bool {
        !(self.left || self.right)
    }
}

/// Input of a cursor for a single frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CursorState {
    pub position: Pos,
    pub buttons: Buttons,
}

impl CursorState {
    pub const fn new(position: Pos, left: bool, right: bool) -> Self {
        Self {
            position,
            buttons: Buttons::new(left, right),
        }
    }
}

/// One competing cursor together with its input bookkeeping.
///
/// The public flags may be modified by targets, e.g. a circle consumes the
/// click edge it reacted to so that the same click can't judge a second
/// circle.
#[derive(Clone, Debug)]
pub struct PlayerContext {
    id: PlayerId,
    name: String,
    kind: CursorKind,
    difficulty: Difficulty,
    cursor: CursorState,
    /// Button state of the previous click pass.
    buttons: Buttons,
    game_down_state: bool,
    mouse_down_button: Buttons,
    last_button: Buttons,
    last_button2: Buttons,

    /// Unconsumed rising edge of the left button.
    pub left_cond: bool,
    /// Unconsumed rising edge of the right button.
    pub right_cond: bool,
    /// Rising edge of the left button this frame, regardless of consumption.
    pub left_cond_e: bool,
    /// Rising edge of the right button this frame, regardless of consumption.
    pub right_cond_e: bool,
    /// Whether a single press of both buttons may judge two targets.
    pub double_click: bool,
    /// Whether a target already took this frame's click.
    pub already_stolen: bool,
}

impl PlayerContext {
    pub(crate) fn new(
        id: PlayerId,
        name: String,
        kind: CursorKind,
        difficulty: Difficulty,
        double_click: bool,
    ) -> Self {
        Self {
            id,
            name,
            kind,
            difficulty,
            cursor: CursorState::default(),
            buttons: Buttons::NONE,
            game_down_state: false,
            mouse_down_button: Buttons::NONE,
            last_button: Buttons::NONE,
            last_button2: Buttons::NONE,
            left_cond: false,
            right_cond: false,
            left_cond_e: false,
            right_cond_e: false,
            double_click,
            already_stolen: false,
        }
    }

    pub const fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn kind(&self) -> CursorKind {
        self.kind
    }

    pub const fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    /// The cursor's input of the current frame.
    pub const fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    /// Button state as of the previous click pass.
    pub const fn previous_buttons(&self) -> Buttons {
        self.buttons
    }

    /// Whether any button was held when the button state last changed.
    pub const fn game_down_state(&self) -> bool {
        self.game_down_state
    }

    /// Buttons held since the button state last changed.
    pub const fn mouse_down_button(&self) -> Buttons {
        self.mouse_down_button
    }

    /// Buttons that were held before [`mouse_down_button`].
    ///
    /// [`mouse_down_button`]: Self::mouse_down_button
    pub const fn last_button(&self) -> Buttons {
        self.last_button
    }

    /// Buttons that were held before [`last_button`].
    ///
    /// [`last_button`]: Self::last_button
    pub const fn last_button2(&self) -> Buttons {
        self.last_button2
    }

    pub(crate) fn set_cursor(&mut self, cursor: CursorState) {
        self.cursor = cursor;
    }

    /// Derive this frame's click edges. Must be paired with
    /// [`end_click_pass`](Self::end_click_pass).
    pub(crate) fn begin_click_pass(&mut self) {
        self.already_stolen = false;

        if !self.kind.uses_buttons() {
            return;
        }

        let curr = self.cursor.buttons;
        let prev = self.buttons;

        self.left_cond = !prev.left && curr.left;
        self.right_cond = !prev.right && curr.right;
        self.left_cond_e = self.left_cond;
        self.right_cond_e = self.right_cond;

        if prev != curr {
            self.game_down_state = !curr.both_released();
            self.last_button2 = self.last_button;
            self.last_button = self.mouse_down_button;
            self.mouse_down_button = curr;
        }
    }

    pub(crate) fn end_click_pass(&mut self) {
        if self.kind.uses_buttons() {
            self.buttons = self.cursor.buttons;
        }
    }
}
