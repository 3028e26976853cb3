use crate::history::mood_emoji;

pub fn render_index(date: &str) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{SCALE}}", &mood_scale_markup())
}

fn mood_scale_markup() -> String {
    (1..=10)
        .map(|rating| {
            format!(
                r#"<button class="mood-option" type="button" data-rating="{rating}" aria-label="Rate today {rating} out of 10"><span class="option-emoji">{}</span><span class="option-num">{rating}</span></button>"#,
                mood_emoji(rating)
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Mood Log</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    section {
      display: grid;
      gap: 14px;
    }

    h2 {
      margin: 0;
      font-size: 1.4rem;
    }

    .scale {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(64px, 1fr));
      gap: 10px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 16px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 10px;
    }

    button:active {
      transform: scale(0.98);
    }

    button:disabled {
      opacity: 0.6;
      cursor: wait;
    }

    .mood-option {
      background: white;
      border: 1px solid rgba(47, 72, 88, 0.12);
      border-radius: 18px;
      padding: 12px 6px;
      display: grid;
      gap: 4px;
      place-items: center;
      box-shadow: none;
    }

    .mood-option .option-emoji {
      font-size: 1.6rem;
    }

    .mood-option .option-num {
      font-size: 0.85rem;
      color: #6b645d;
    }

    .mood-option.selected {
      border-color: var(--accent);
      background: #fff3ee;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.2);
    }

    .note-row {
      display: grid;
      grid-template-columns: 1fr auto;
      gap: 12px;
    }

    #note {
      border: 1px solid rgba(47, 72, 88, 0.16);
      border-radius: 14px;
      padding: 14px 16px;
      font: inherit;
      background: white;
    }

    .btn-log {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    .btn-history {
      background: var(--accent-2);
      color: white;
      box-shadow: 0 10px 24px rgba(47, 72, 88, 0.3);
    }

    .message {
      display: none;
      border-radius: 14px;
      padding: 14px 16px;
      font-weight: 600;
    }

    .message.success {
      background: #e7f5ec;
      color: #2d7a4b;
    }

    .message.error {
      background: #fbe9e6;
      color: #c63b2b;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat span {
      display: block;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.net {
      color: var(--accent);
    }

    .stat .value.period {
      font-size: 1.1rem;
    }

    .history-header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    #history {
      display: grid;
      gap: 12px;
    }

    #history[hidden] {
      display: none;
    }

    .history-item {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
      background: white;
      border: 1px solid rgba(47, 72, 88, 0.08);
      border-radius: 18px;
      padding: 14px 18px;
    }

    .history-item .note {
      margin: 4px 0 0;
      color: #6b645d;
      font-size: 0.9rem;
    }

    .history-rating {
      display: flex;
      align-items: center;
      gap: 10px;
      color: var(--accent-2);
    }

    .history-emoji {
      font-size: 1.5rem;
    }

    .empty {
      margin: 0;
      color: #6b645d;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      .note-row {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Daily Mood Log</h1>
      <p class="subtitle">How are you feeling today ({{DATE}})?</p>
    </header>

    <section>
      <h2>Rate your day</h2>
      <div class="scale">
      {{SCALE}}
      </div>
      <div class="note-row">
        <input id="note" type="text" maxlength="280" placeholder="Add a note (optional)" />
        <button class="btn-log" id="log-btn" type="button">Log mood</button>
      </div>
    </section>

    <div class="message" id="message"></div>

    <section>
      <h2>Stats</h2>
      <div class="panel" id="stats">
        <p class="empty">Loading stats...</p>
      </div>
    </section>

    <section>
      <div class="history-header">
        <h2>History</h2>
        <button class="btn-history" id="history-btn" type="button">Load last 7 days</button>
      </div>
      <div id="history" hidden></div>
    </section>

    <p class="hint">One entry per calendar day (server time). Logging again replaces today's entry.</p>
  </main>

  <script>
    const noteEl = document.getElementById('note');
    const logBtn = document.getElementById('log-btn');
    const historyBtn = document.getElementById('history-btn');
    const statsEl = document.getElementById('stats');
    const historyEl = document.getElementById('history');
    const messageEl = document.getElementById('message');
    const options = Array.from(document.querySelectorAll('.mood-option'));

    const page = { selectedRating: null, messageTimer: null };
    const lifecycle = new AbortController();
    window.addEventListener('pagehide', () => lifecycle.abort());

    const showMessage = (text, type) => {
      messageEl.textContent = text;
      messageEl.className = `message ${type}`;
      messageEl.style.display = 'block';
      if (page.messageTimer) {
        clearTimeout(page.messageTimer);
      }
      page.messageTimer = setTimeout(() => {
        messageEl.style.display = 'none';
      }, 4000);
    };

    const selectOption = (option) => {
      options.forEach((other) => other.classList.remove('selected'));
      option.classList.add('selected');
      page.selectedRating = parseInt(option.dataset.rating, 10);
    };

    const renderStats = (stats) => {
      const average = stats.averageRating == null ? 'N/A' : `${stats.averageRating}/10`;
      const goodDays = stats.goodDaysCount || 0;
      statsEl.innerHTML = `
        <div class="stat">
          <span class="label">Average rating</span>
          <span class="value">${average}</span>
        </div>
        <div class="stat">
          <span class="label">Good days (7+)</span>
          <span class="value net">${goodDays}</span>
        </div>
        <div class="stat">
          <span class="label">Period</span>
          <span class="value period">${stats.period}</span>
        </div>
      `;
    };

    const loadStats = async () => {
      try {
        const res = await fetch('/api/mood/stats', { signal: lifecycle.signal });
        if (!res.ok) {
          throw new Error('Unable to load stats');
        }
        renderStats(await res.json());
      } catch (err) {
        console.error('stats failed:', err);
        statsEl.innerHTML = '<p class="empty">Unable to load stats.</p>';
      }
    };

    const renderHistory = (history) => {
      if (history.length === 0) {
        historyEl.innerHTML = '<p class="empty">No mood entries yet. Log your first one above.</p>';
        return;
      }
      historyEl.innerHTML = history
        .map(
          (item) => `
        <div class="history-item">
          <div>
            <strong>${item.label}</strong>
            <p class="note">${item.note || 'No note'}</p>
          </div>
          <div class="history-rating">
            <span class="history-emoji">${item.emoji}</span>
            <strong>${item.rating}/10</strong>
          </div>
        </div>`
        )
        .join('');
    };

    const loadHistory = async () => {
      historyBtn.disabled = true;
      try {
        const res = await fetch('/api/mood/history?days=7', { signal: lifecycle.signal });
        if (!res.ok) {
          throw new Error('Unable to load history');
        }
        renderHistory(await res.json());
        historyEl.hidden = false;
        historyBtn.textContent = 'Refresh history';
      } catch (err) {
        console.error('history failed:', err);
        showMessage('Could not load history.', 'error');
      } finally {
        historyBtn.disabled = false;
      }
    };

    const logMood = async () => {
      if (!page.selectedRating) {
        showMessage('Pick a rating first.', 'error');
        return;
      }

      logBtn.disabled = true;
      try {
        const res = await fetch('/api/mood', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ rating: page.selectedRating, note: noteEl.value.trim() }),
          signal: lifecycle.signal
        });
        if (!res.ok) {
          throw new Error((await res.text()) || 'Request failed');
        }
        noteEl.value = '';
        showMessage('Mood logged.', 'success');
        await loadStats();
      } catch (err) {
        console.error('log failed:', err);
        showMessage('Could not save your mood. Try again.', 'error');
      } finally {
        logBtn.disabled = false;
      }
    };

    const preloadToday = async () => {
      try {
        const res = await fetch('/api/mood/today', { signal: lifecycle.signal });
        if (res.status === 404) {
          return; // nothing logged yet
        }
        if (!res.ok) {
          throw new Error('Unable to check today');
        }
        const mood = await res.json();
        const option = options.find((o) => parseInt(o.dataset.rating, 10) === mood.rating);
        if (option) {
          selectOption(option);
        }
        noteEl.value = mood.note || '';
        showMessage("Today's mood is already logged. Submit again to update it.", 'success');
      } catch (err) {
        console.error('today check failed:', err);
      }
    };

    options.forEach((option) => {
      option.addEventListener('click', () => selectOption(option));
    });
    logBtn.addEventListener('click', () => {
      logMood();
    });
    historyBtn.addEventListener('click', () => {
      loadHistory();
    });
    noteEl.addEventListener('keydown', (event) => {
      if (event.key === 'Enter' && event.ctrlKey) {
        logMood();
      }
    });

    loadStats();
    preloadToday();
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_index_fills_date_and_scale() {
        let page = render_index("2026-01-05");
        assert!(page.contains("2026-01-05"));
        assert!(!page.contains("{{DATE}}"));
        assert!(!page.contains("{{SCALE}}"));
        assert_eq!(page.matches("class=\"mood-option\"").count(), 10);
        assert!(page.contains("data-rating=\"1\""));
        assert!(page.contains("data-rating=\"10\""));
    }
}
