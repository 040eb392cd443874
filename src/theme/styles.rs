//! Global CSS styles for Chatpane.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --page-dark: #161616;
  --panel: #f9f9f9;
  --surface: #ffffff;
  --border: #e1e1e1;

  /* Accents */
  --accent: #234de6;
  --sent-bubble: #4424d021;

  /* Text */
  --text-primary: #1b1b1b;
  --text-secondary: #858585;
  --text-muted: #a7a7a7;

  /* Status */
  --presence-on: #2eaf5d;
  --presence-off: #a7a7a7;
  --danger: #ff3366;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', Helvetica, Arial, sans-serif;
  --text-sm: 0.8125rem;
  --text-base: 1.125rem;

  /* Transitions */
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  font-size: var(--text-base);
  background: var(--page-dark);
  color: var(--text-primary);
}

/* === Page === */
.chat-page {
  min-height: 100vh;
  padding: 3em 6em 6em 6em;
  background: var(--page-dark);
}

.chat-page-header {
  width: 100%;
  text-align: center;
}

.page-title {
  margin-top: 8px;
  color: var(--accent);
}

.chat-panes {
  display: flex;
  flex-direction: row;
  margin: 1rem auto 0 auto;
  max-width: 1280px;
  height: calc(100vh - 200px);
  background: var(--panel);
  border-radius: 15px;
  overflow: hidden;
}

.user-name {
  color: var(--accent);
  font-size: var(--text-base);
}

/* === Conversation List === */
.conversation-sidebar {
  width: 400px;
  flex-shrink: 0;
  overflow-y: auto;
  overflow-x: hidden;
}

.self-panel {
  height: 75px;
  display: flex;
  justify-content: center;
  align-items: center;
  gap: 0.75rem;
}

.self-avatar {
  width: 50px;
  height: 50px;
  border-radius: 50%;
}

.chat-count {
  text-align: center;
  color: var(--text-secondary);
  margin-top: -15px;
  padding-bottom: 5px;
}

.conversation-item {
  padding: 10px 30px;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.conversation-item:hover,
.conversation-item.selected {
  background: var(--surface);
}

.conversation-avatar {
  width: 50px;
  height: 50px;
  float: right;
  margin-top: 10px;
}

.presence-on {
  color: var(--presence-on);
}

.presence-off {
  color: var(--presence-off);
}

.conversation-time {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

/* === Thread === */
.conversation-thread {
  display: flex;
  flex-direction: column;
  flex: 1;
  padding: 0 40px 40px 40px;
  border-left: 1px solid var(--border);
  overflow-y: auto;
  overflow-x: hidden;
}

.thread-header {
  display: flex;
  justify-content: center;
  align-items: center;
  gap: 0.75rem;
  margin: 0.5rem;
  padding: 0.75rem 0 0.25rem 0;
  border-bottom: 1px solid var(--border);
}

.thread-header-avatar {
  width: 50px;
  height: 50px;
}

.thread-empty {
  margin: auto;
  color: var(--text-secondary);
}

/* === Message Bubbles === */
.message-row {
  display: flex;
}

.message-row-sent {
  justify-content: flex-end;
}

.message-row-received {
  justify-content: flex-start;
}

.message-bubble {
  display: flex;
  align-items: center;
  width: fit-content;
  margin: 5px 0;
  padding: 10px 20px;
  border-radius: 10px;
  background: var(--surface);
}

.message-bubble-sent {
  flex-direction: row-reverse;
  background: var(--sent-bubble);
}

.message-bubble-avatar {
  width: 25px;
  height: 25px;
  border-radius: 15px;
}

.message-bubble-received .message-bubble-avatar {
  margin: 0 10px 0 0;
}

.message-bubble-sent .message-bubble-avatar {
  margin: 0 0 0 10px;
}

/* === Errors === */
.error-notice {
  margin: 2rem auto;
  max-width: 600px;
  padding: 1rem 1.5rem;
  border: 1px solid var(--danger);
  border-radius: 10px;
  color: var(--danger);
  background: var(--panel);
}
"#;
