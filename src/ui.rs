use std::collections::BTreeMap;

/// Milestone copy keyed by the click count *before* the increment, so the
/// message lands when the displayed count reaches 10, 50, 100 and 101.
const MILESTONES: &[(u64, &str)] = &[
    (9, "Double digits! \u{1F389}"),
    (49, "Halfway to 100! \u{1F680}"),
    (99, "Almost there! \u{1F4AA}"),
    (100, "Century! \u{1F3C6}"),
];

pub fn milestone_for(clicks_before: u64) -> Option<&'static str> {
    MILESTONES
        .iter()
        .find(|(at, _)| *at == clicks_before)
        .map(|(_, message)| *message)
}

fn milestones_json() -> String {
    let table: BTreeMap<u64, &str> = MILESTONES.iter().copied().collect();
    serde_json::to_string(&table).unwrap_or_else(|_| "{}".to_string())
}

pub fn render_index() -> String {
    INDEX_HTML.replace("{{MILESTONES}}", &milestones_json())
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Click Me</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&display=swap');

    :root {
      --bg-1: #1a1a1a;
      --bg-2: #2a2a2a;
      --glow: rgba(100, 200, 255, 0.2);
      --accent: #64c8ff;
      --face-up: linear-gradient(135deg, #666 0%, #444 100%);
      --face-down: linear-gradient(135deg, #555 0%, #3a3a3a 100%);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), var(--bg-2));
      color: #fff;
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: flex;
      flex-direction: column;
      align-items: center;
      justify-content: center;
      padding: 2rem;
      perspective: 1500px;
    }

    .scene {
      position: relative;
      height: 280px;
      display: flex;
      align-items: center;
      justify-content: center;
    }

    .glow {
      position: absolute;
      top: 50%;
      left: 50%;
      width: 400px;
      height: 400px;
      transform: translate(-50%, -50%);
      background: radial-gradient(circle, var(--glow), transparent 70%);
      border-radius: 50%;
      filter: blur(40px);
      opacity: 0.6;
      transition: opacity 0.15s ease;
      pointer-events: none;
    }

    .scene.pressed .glow {
      opacity: 1;
    }

    #press {
      position: relative;
      width: 180px;
      height: 180px;
      border: none;
      border-radius: 50%;
      padding: 0;
      cursor: pointer;
      outline: none;
      background:
        var(--face-up),
        repeating-linear-gradient(
          45deg,
          rgba(255, 255, 255, 0.05),
          rgba(255, 255, 255, 0.05) 1px,
          transparent 1px,
          transparent 2px
        );
      box-shadow:
        0 15px 35px rgba(0, 0, 0, 0.4),
        0 5px 15px rgba(0, 0, 0, 0.3),
        inset 0 -8px 16px rgba(0, 0, 0, 0.4),
        0 0 0 1px rgba(255, 255, 255, 0.1);
      transform: scale(1);
      transition: transform 0.08s ease, box-shadow 0.12s ease;
      overflow: hidden;
    }

    #press.pressed {
      background: var(--face-down);
      transform: scale(0.9);
      box-shadow:
        0 1px 2px rgba(0, 0, 0, 0.3),
        inset 0 1px 5px rgba(0, 0, 0, 0.5),
        0 0 0 1px rgba(255, 255, 255, 0.1);
    }

    #press .sheen {
      position: absolute;
      inset: 0;
      border-radius: 50%;
      background: linear-gradient(135deg, rgba(255, 255, 255, 0.2) 0%, transparent 50%);
      opacity: 0.6;
      transition: opacity 0.12s ease;
      pointer-events: none;
    }

    #press.pressed .sheen {
      opacity: 0.2;
    }

    #press .label {
      position: relative;
      color: rgba(255, 255, 255, 0.9);
      font-size: 16px;
      font-weight: 500;
      text-transform: uppercase;
      letter-spacing: 0.15em;
      text-shadow: 0 1px 1px rgba(0, 0, 0, 0.6);
      user-select: none;
      pointer-events: none;
    }

    .ripple {
      position: absolute;
      inset: -50%;
      border-radius: 50%;
      background: radial-gradient(circle, rgba(255, 255, 255, 0.4) 0%, transparent 70%);
      pointer-events: none;
      animation: ripple 0.3s ease-out forwards;
    }

    @keyframes ripple {
      from {
        transform: scale(0.8);
        opacity: 0.5;
      }
      to {
        transform: scale(1.5);
        opacity: 0;
      }
    }

    #panel {
      text-align: center;
      padding: 1.4rem 2rem;
      margin-top: 2rem;
      background: rgba(255, 255, 255, 0.05);
      backdrop-filter: blur(10px);
      border-radius: 16px;
      box-shadow:
        0 8px 20px rgba(0, 0, 0, 0.3),
        inset 0 0 0 1px rgba(255, 255, 255, 0.1);
      min-width: 180px;
      animation: rise 0.4s ease-out;
    }

    #panel[hidden] {
      display: none;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(30px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    #count {
      display: block;
      font-size: 36px;
      font-weight: 600;
      line-height: 1;
      letter-spacing: -0.02em;
      text-shadow: 0 2px 4px rgba(0, 0, 0, 0.3);
    }

    #caption {
      display: block;
      margin-top: 0.5rem;
      font-size: 13px;
      color: rgba(255, 255, 255, 0.7);
      text-transform: uppercase;
      letter-spacing: 0.2em;
    }

    #caption .again {
      color: var(--accent);
      text-shadow: 0 0 8px rgba(100, 200, 255, 0.5);
    }

    #milestone {
      margin: 1.2rem 0 0;
      min-height: 1.2em;
      font-size: 14px;
      font-weight: 500;
      color: rgba(255, 255, 255, 0.9);
      letter-spacing: 0.05em;
    }

    #today {
      margin: 0.8rem 0 0;
      font-size: 12px;
      color: rgba(255, 255, 255, 0.5);
      letter-spacing: 0.05em;
    }

    footer {
      position: fixed;
      bottom: 1rem;
      width: 100%;
      text-align: center;
      font-size: 12px;
      color: rgba(255, 255, 255, 0.6);
      letter-spacing: 0.05em;
    }
  </style>
</head>
<body>
  <div class="scene" id="scene">
    <div class="glow"></div>
    <button id="press" type="button" aria-label="Click the button">
      <span class="sheen"></span>
      <span class="label" id="label">Click Me</span>
    </button>
  </div>

  <section id="panel" hidden>
    <span id="count"></span>
    <span id="caption"></span>
    <p id="milestone"></p>
    <p id="today" hidden></p>
  </section>

  <footer>Counts are kept per calendar day (server time), for no reason at all.</footer>

  <script>
    const MILESTONES = {{MILESTONES}};

    const sceneEl = document.getElementById('scene');
    const buttonEl = document.getElementById('press');
    const labelEl = document.getElementById('label');
    const panelEl = document.getElementById('panel');
    const countEl = document.getElementById('count');
    const captionEl = document.getElementById('caption');
    const milestoneEl = document.getElementById('milestone');
    const todayEl = document.getElementById('today');

    let clicks = 0;
    let todayTotal = null;
    let isMobile = false;

    const narrow = window.matchMedia('(max-width: 768px)');
    const applyViewport = () => {
      isMobile = narrow.matches;
      labelEl.textContent = isMobile ? 'Press Me' : 'Click Me';
      render();
    };
    window.addEventListener('resize', applyViewport);

    let audioCtx = null;
    let clickBuffer = null;
    let audioLoading = null;

    const loadClickSound = () => {
      if (audioLoading) {
        return audioLoading;
      }
      audioLoading = (async () => {
        try {
          audioCtx = new (window.AudioContext || window.webkitAudioContext)();
          const res = await fetch('/click.mp3');
          if (!res.ok) {
            throw new Error('fetch returned ' + res.status);
          }
          const bytes = await res.arrayBuffer();
          clickBuffer = await audioCtx.decodeAudioData(bytes);
        } catch (err) {
          console.error('click sound unavailable:', err);
        }
      })();
      return audioLoading;
    };

    const playClickSound = () => {
      if (!audioCtx || !clickBuffer) {
        return;
      }
      try {
        if (audioCtx.state === 'suspended') {
          audioCtx.resume();
        }
        const source = audioCtx.createBufferSource();
        const gain = audioCtx.createGain();
        gain.gain.value = 0.5;
        source.buffer = clickBuffer;
        source.connect(gain);
        gain.connect(audioCtx.destination);
        source.start(0);
      } catch (err) {
        console.error('click sound failed:', err);
      }
    };

    const buzz = () => {
      if (!navigator.vibrate) {
        return;
      }
      try {
        navigator.vibrate([5, 10, 5]);
      } catch (err) {
        console.error('vibration failed:', err);
      }
    };

    const persistClick = () => {
      fetch('/api/clicks', { method: 'POST' })
        .then((res) => {
          if (!res.ok) {
            console.error('failed to record click: status', res.status);
          }
        })
        .catch((err) => console.error('failed to record click:', err));
    };

    const render = () => {
      if (clicks === 0) {
        panelEl.hidden = true;
        return;
      }
      panelEl.hidden = false;
      countEl.textContent = clicks + (clicks === 1 ? ' click' : ' clicks');
      const verb = isMobile ? "you've pressed" : "you've clicked";
      const again = clicks > 1 ? ' <span class="again">again</span>' : '';
      captionEl.innerHTML = verb + ' this button' + again + ' for no reason';
      if (todayTotal !== null) {
        todayEl.hidden = false;
        todayEl.textContent = todayTotal + ' recorded today across everyone';
      }
    };

    const spawnRipple = () => {
      const ripple = document.createElement('span');
      ripple.className = 'ripple';
      ripple.addEventListener('animationend', () => ripple.remove());
      buttonEl.appendChild(ripple);
    };

    buttonEl.addEventListener('click', () => {
      const before = clicks;
      clicks += 1;
      if (todayTotal !== null) {
        todayTotal += 1;
      }

      buttonEl.classList.add('pressed');
      sceneEl.classList.add('pressed');
      setTimeout(() => {
        buttonEl.classList.remove('pressed');
        sceneEl.classList.remove('pressed');
      }, 80);
      spawnRipple();

      loadClickSound().then(playClickSound);
      buzz();

      milestoneEl.textContent = '';
      const message = MILESTONES[before];
      if (message) {
        milestoneEl.textContent = message;
      }

      persistClick();
      render();
    });

    fetch('/api/clicks')
      .then((res) => {
        if (!res.ok) {
          throw new Error('status ' + res.status);
        }
        return res.json();
      })
      .then((data) => {
        todayTotal = data.count;
        render();
      })
      .catch((err) => console.error('failed to load today count:', err));

    applyViewport();
  </script>
</body>
</html>
"##;
