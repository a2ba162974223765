//! Fixed user-facing texts.

/// Reply to `/start`.
pub const GREETING: &str =
    "👋 Привет! Я бот для отслеживания курса USDT.\n\nНажми кнопку или /rates:";

/// Reply to `/help`, in HTML.
pub const HELP: &str = "ℹ️ <b>Команды:</b>\n\
    /start — приветствие\n\
    /rates — курс USDT\n\
    /help — справка\n\n\
    • <b>Bybit P2P</b> — USDT/RUB\n\
    • <b>HTX</b> — USDT/CNY";

/// Placeholder shown while `/rates` is being fetched.
pub const LOADING: &str = "⏳ Загружаю данные...";

/// Toast shown on refresh button press.
pub const REFRESHING: &str = "Обновляю данные...";

/// Label of the button on the greeting.
pub const GET_RATES_LABEL: &str = "💹 Получить курс";

/// Label of the button under a report.
pub const REFRESH_LABEL: &str = "🔄 Обновить";
