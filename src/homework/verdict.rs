const VERDICTS: &[(&str, &str)] = &[
    ("approved", "Работа проверена: ревьюеру всё понравилось. Ура!"),
    ("reviewing", "Работа взята на проверку ревьюером."),
    ("rejected", "Работа проверена: у ревьюера есть замечания."),
];

/// Human-readable verdict for a review status, if the status is known.
pub fn verdict_for(status: &str) -> Option<&'static str> {
    VERDICTS
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, verdict)| *verdict)
}
