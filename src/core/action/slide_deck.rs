//=========================================================================
// Slide Deck
//=========================================================================
//
// Shows a run of 2D slides over the (paused) globe.
//
// Page keys move the slide index directly. Stepping one before the first
// or one past the last slide bounces the index back and leaves the deck
// through `Prev` / `Next` on the next animate.
//
//=========================================================================

use log::debug;

use super::{Action, ActionArgs, ActionKind, Capabilities, Transition};
use crate::core::context::StageContext;
use crate::core::error::StageError;
use crate::core::input::{page_navigation, InputEvent};

/// A named list of slides, entered at the end matching the arrival.
#[derive(Debug)]
pub struct SlideDeck {
    arrival: Transition,
    slides: Vec<String>,
    index: isize,
    active: Option<usize>,
}

impl SlideDeck {
    pub fn new(arrival: Transition) -> Self {
        Self {
            arrival,
            slides: Vec::new(),
            index: -1,
            active: None,
        }
    }

    fn len(&self) -> isize {
        self.slides.len() as isize
    }

    /// Shows the slide at the current index, if it is in range.
    fn show_current(&mut self, context: &mut StageContext) {
        let Ok(index) = usize::try_from(self.index) else {
            return;
        };
        if index >= self.slides.len() {
            return;
        }

        if let Some(previous) = self.active.replace(index) {
            context.slides.hide_slide(&self.slides[previous]);
        }
        context.slides.show_slide(&self.slides[index]);
    }
}

impl Action for SlideDeck {
    fn capabilities(&self) -> Capabilities {
        Capabilities::NONE
            .with_init()
            .with_fini()
            .with_handler()
            .without_render()
    }

    fn init(&mut self, context: &mut StageContext, args: &ActionArgs) -> Result<(), StageError> {
        let slides = args.slides().ok_or(StageError::MismatchedArgs {
            action: ActionKind::SlideDeck.name(),
            expected: "slides",
        })?;
        self.slides = slides.to_vec();

        self.index = match self.arrival {
            Transition::Next => 0,
            Transition::Prev => self.len() - 1,
        };
        debug!(target: "stage", "Slide deck of {} entered at {}", self.slides.len(), self.index);

        self.show_current(context);
        context.slides.set_deck_visible(true);
        Ok(())
    }

    fn fini(&mut self, context: &mut StageContext) {
        if let Some(active) = self.active.take() {
            context.slides.hide_slide(&self.slides[active]);
        }
        context.slides.set_deck_visible(false);
    }

    /// Only moves the index; the slide itself is shown from `animate`.
    fn handle(&mut self, _context: &StageContext, event: &InputEvent) {
        let step = match page_navigation(event) {
            Some(Transition::Prev) => -1,
            Some(Transition::Next) => 1,
            None => return,
        };
        self.index = (self.index + step).clamp(-1, self.len());
    }

    fn animate(&mut self, context: &mut StageContext) -> Option<Transition> {
        if self.index < 0 {
            self.index = 0;
            return Some(Transition::Prev);
        }
        if self.index >= self.len() {
            self.index = self.len() - 1;
            return Some(Transition::Next);
        }

        if self.active != usize::try_from(self.index).ok() {
            self.show_current(context);
        }
        None
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crate::core::testing::{mock_context, Call};

    fn deck() -> ActionArgs {
        ActionArgs::Slides(vec!["intro".into(), "stack".into(), "outro".into()])
    }

    fn page_down() -> InputEvent {
        InputEvent::KeyUp { key: KeyCode::PageDown }
    }

    fn page_up() -> InputEvent {
        InputEvent::KeyUp { key: KeyCode::PageUp }
    }

    #[test]
    fn forward_arrival_shows_first_slide() {
        let (mut context, harness) = mock_context();
        let mut slides = SlideDeck::new(Transition::Next);
        slides.init(&mut context, &deck()).unwrap();

        assert_eq!(
            *harness.log.borrow(),
            vec![Call::ShowSlide("intro".into()), Call::DeckVisible(true)]
        );
    }

    #[test]
    fn backward_arrival_shows_last_slide() {
        let (mut context, harness) = mock_context();
        let mut slides = SlideDeck::new(Transition::Prev);
        slides.init(&mut context, &deck()).unwrap();

        assert_eq!(harness.log.borrow()[0], Call::ShowSlide("outro".into()));
    }

    #[test]
    fn page_keys_move_through_slides() {
        let (mut context, harness) = mock_context();
        let mut slides = SlideDeck::new(Transition::Next);
        slides.init(&mut context, &deck()).unwrap();
        harness.log.borrow_mut().clear();

        slides.handle(&context, &page_down());
        assert!(harness.log.borrow().is_empty());
        assert_eq!(slides.animate(&mut context), None);

        assert_eq!(
            *harness.log.borrow(),
            vec![Call::HideSlide("intro".into()), Call::ShowSlide("stack".into())]
        );

        slides.handle(&context, &page_up());
        slides.animate(&mut context);
        assert_eq!(harness.log.borrow().last(), Some(&Call::ShowSlide("intro".into())));
    }

    #[test]
    fn bounces_out_past_the_last_slide() {
        let (mut context, _harness) = mock_context();
        let mut slides = SlideDeck::new(Transition::Prev);
        slides.init(&mut context, &deck()).unwrap();

        slides.handle(&context, &page_down());
        assert_eq!(slides.animate(&mut context), Some(Transition::Next));
        assert_eq!(slides.index, 2);
        assert_eq!(slides.animate(&mut context), None);
    }

    #[test]
    fn bounces_out_before_the_first_slide() {
        let (mut context, _harness) = mock_context();
        let mut slides = SlideDeck::new(Transition::Next);
        slides.init(&mut context, &deck()).unwrap();

        slides.handle(&context, &page_up());
        slides.handle(&context, &page_up());
        assert_eq!(slides.animate(&mut context), Some(Transition::Prev));
        assert_eq!(slides.index, 0);
    }

    #[test]
    fn fini_hides_active_slide_and_deck() {
        let (mut context, harness) = mock_context();
        let mut slides = SlideDeck::new(Transition::Next);
        slides.init(&mut context, &deck()).unwrap();
        harness.log.borrow_mut().clear();

        slides.fini(&mut context);
        assert_eq!(
            *harness.log.borrow(),
            vec![Call::HideSlide("intro".into()), Call::DeckVisible(false)]
        );
    }

    #[test]
    fn rejects_travel_args() {
        let (mut context, _harness) = mock_context();
        let mut slides = SlideDeck::new(Transition::Next);

        assert!(slides.init(&mut context, &ActionArgs::None).is_err());
    }
}
