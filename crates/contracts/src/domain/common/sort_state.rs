use serde::{Deserialize, Serialize};

/// Направление сортировки списка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Порядок по умолчанию, определяется сервером
    #[default]
    Default,
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Default => "default",
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, SortDirection::Default)
    }

    /// Следующее направление при клике по заголовку: `desc` → `asc`, всё остальное → `desc`
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Desc => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }
}

/// Параметры сортировки, уходящие в запрос списка
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortParams {
    pub direction: SortDirection,
    pub column: String,
}

/// Состояние сортировки экрана списка.
///
/// `column` пуст только пока `direction == Default`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    #[serde(rename = "type")]
    pub direction: SortDirection,
    pub column: String,
}

impl SortState {
    /// Новое состояние после клика по колонке.
    ///
    /// Направление чередуется относительно предыдущего глобального направления,
    /// смена колонки чередование не сбрасывает.
    pub fn toggle(&self, column: &str) -> SortState {
        if column.is_empty() {
            return self.clone();
        }
        SortState {
            direction: self.direction.toggled(),
            column: column.to_string(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.direction.is_default() && !self.column.is_empty()
    }

    pub fn params(&self) -> Option<SortParams> {
        self.is_active().then(|| SortParams {
            direction: self.direction,
            column: self.column.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_toggle_from_default_is_desc() {
        let state = SortState::default().toggle("name");
        assert_eq!(state.direction, SortDirection::Desc);
        assert_eq!(state.column, "name");
    }

    #[test]
    fn repeated_toggles_alternate() {
        let mut state = SortState::default();
        let mut seen = Vec::new();
        for _ in 0..5 {
            state = state.toggle("name");
            seen.push(state.direction);
        }
        use SortDirection::*;
        assert_eq!(seen, vec![Desc, Asc, Desc, Asc, Desc]);
    }

    #[test]
    fn switching_column_keeps_alternation() {
        let state = SortState::default().toggle("name");
        let state = state.toggle("position");
        assert_eq!(state.direction, SortDirection::Asc);
        assert_eq!(state.column, "position");
    }

    #[test]
    fn empty_column_does_not_break_invariant() {
        let state = SortState::default().toggle("");
        assert_eq!(state, SortState::default());
        assert!(state.params().is_none());
    }

    #[test]
    fn serializes_with_type_key() {
        let state = SortState {
            direction: SortDirection::Asc,
            column: "name".into(),
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"type":"asc","column":"name"}"#);
    }
}
