//! Self-contained HTML page for the EmoMind mood view.
//!
//! The browser connects over WebSocket, sends utterance text, and
//! renders the mood plus the DOT source of the state graph. No external
//! assets; everything is embedded.

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>EmoMind</title>
<style>
  body { background: #0a0a0f; color: #e0e0e0; font-family: monospace;
         max-width: 720px; margin: 2em auto; }
  h1 { color: #00e5ff; }
  #mood { font-size: 2em; padding: 0.2em 0.5em; border-radius: 6px;
          display: inline-block; background: rgba(10, 10, 20, 0.85); }
  #scores { margin: 1em 0; color: #9fb0c0; }
  #dot { white-space: pre; font-size: 0.75em; color: #5a6a7a;
         max-height: 18em; overflow-y: auto; }
  input { width: 70%; background: #12121a; color: #e0e0e0;
          border: 1px solid #00e5ff; padding: 0.5em; }
  button { background: #00e5ff; border: none; padding: 0.5em 1em;
           cursor: pointer; }
</style>
</head>
<body>
<h1>EmoMind</h1>
<div>Current mood: <span id="mood">Neutral</span></div>
<div id="scores"></div>
<form id="say">
  <input id="text" placeholder="say something..." autocomplete="off">
  <button type="submit">send</button>
  <button type="button" id="reset">reset</button>
</form>
<div id="dot"></div>
<script>
const ws = new WebSocket(`ws://${location.host}/ws`);
ws.onopen = () => ws.send(JSON.stringify({ type: 'Ready' }));
ws.onmessage = (ev) => {
  const msg = JSON.parse(ev.data);
  if (msg.type === 'Init') {
    document.getElementById('mood').textContent = msg.current;
    document.getElementById('dot').textContent = msg.dot;
  } else if (msg.type === 'MoodUpdate') {
    const mood = document.getElementById('mood');
    mood.textContent = msg.mood;
    mood.style.color = msg.mood_color;
    document.getElementById('scores').textContent =
      `emotion: ${msg.emotion_summary} | sentiment: ${msg.sentiment_summary} | cycle ${msg.cycle}`;
    document.getElementById('dot').textContent = msg.dot;
  }
};
document.getElementById('say').addEventListener('submit', (e) => {
  e.preventDefault();
  const input = document.getElementById('text');
  ws.send(JSON.stringify({ type: 'Utterance', text: input.value }));
  input.value = '';
});
document.getElementById('reset').addEventListener('click', () => {
  ws.send(JSON.stringify({ type: 'Reset' }));
});
</script>
</body>
</html>
"#;

pub fn build_page_html() -> String {
    PAGE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_is_self_contained() {
        let page = build_page_html();
        assert!(page.contains("<!DOCTYPE html>"));
        assert!(page.contains("/ws"));
        assert!(!page.contains("http://"));
        assert!(!page.contains("src="));
    }
}
