use std::rc::Rc;

use tasklist_core::{
  FetchError,
  FullListState,
  Task,
  TaskId,
  ViewState
};
use yew::Reducible;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction {
  Toggle(TaskId),
  Add(String),
  OpenModal,
  CloseModal
}

#[derive(Debug)]
pub enum FullListAction {
  View(ViewAction),
  BeginSync,
  FinishSync(
    Result<Vec<Task>, FetchError>
  )
}

/// Home view state behind a reducer so
/// every update sees the latest value.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeStore(pub ViewState);

impl Reducible for HomeStore {
  type Action = ViewAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let next = match action {
      | ViewAction::Toggle(id) => {
        self.0.toggle(id)
      }
      | ViewAction::Add(title) => {
        self.0.add(&title)
      }
      | ViewAction::OpenModal => {
        self.0.open_modal()
      }
      | ViewAction::CloseModal => {
        self.0.close_modal()
      }
    };
    Rc::new(Self(next))
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FullListStore(
  pub FullListState
);

impl Reducible for FullListStore {
  type Action = FullListAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let next = match action {
      | FullListAction::View(
        ViewAction::Toggle(id)
      ) => self.0.toggle(id),
      | FullListAction::View(
        ViewAction::Add(title)
      ) => self.0.add(&title),
      | FullListAction::View(
        ViewAction::OpenModal
      ) => self.0.open_modal(),
      | FullListAction::View(
        ViewAction::CloseModal
      ) => self.0.close_modal(),
      | FullListAction::BeginSync => {
        self.0.begin_sync()
      }
      | FullListAction::FinishSync(
        outcome
      ) => self.0.finish_sync(outcome)
    };
    Rc::new(Self(next))
  }
}
