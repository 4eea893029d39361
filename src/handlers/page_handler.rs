pub fn index() -> impl warp::Reply {
    warp::reply::html(INDEX_HTML)
}

static INDEX_HTML: &str = r#"
<!DOCTYPE html>
<html>
    <head>
        <meta charset="utf-8" />
        <title>Shape Chat</title>
        <style>
        body { font-family: sans-serif; max-width: 720px; margin: 2em auto; }
        #chat { border: 1px solid #ccc; min-height: 300px; padding: 10px; overflow-y: auto; }
        .message-body { white-space: pre-wrap; word-wrap: break-word; margin: 10px 0; }
        .message-body img { max-width: 100%; display: block; }
        .error { color: #b00; }
        </style>
    </head>
    <body>
        <h1>shape chat</h1>
        <div id="chat"></div>
        <input type="text" id="text" size="60" />
        <input type="file" id="image" accept="image/*" />
        <button type="button" id="send">Send</button>
        <script type="text/javascript">
        function line(who, text, cls) {
            var p = document.createElement('p');
            p.classList.add('message-body');
            if (cls) p.classList.add(cls);
            p.innerText = who + ': ' + text;
            chat.appendChild(p);
            chat.scrollTop = chat.scrollHeight;
            return p;
        }
        function showImage(p, url) {
            var img = document.createElement('img');
            img.src = url;
            p.appendChild(img);
        }
        async function upload(file) {
            var form = new FormData();
            form.append('file', file);
            var res = await fetch('/upload-image', { method: 'POST', body: form });
            var data = await res.json();
            if (!res.ok) throw new Error(data.error);
            return location.origin + data.image_url;
        }
        send.onclick = async function() {
            var msg = text.value;
            var file = image.files[0];
            if (!msg && !file) return;
            text.value = '';
            image.value = '';
            var mine = line('You', msg);
            try {
                var body = { message: msg };
                if (file) {
                    body.image_url = await upload(file);
                    showImage(mine, body.image_url);
                }
                var res = await fetch('/chat', {
                    method: 'POST',
                    headers: { 'content-type': 'application/json' },
                    body: JSON.stringify(body)
                });
                var data = await res.json();
                if (!res.ok) throw new Error(data.error);
                var reply = line('Bot', data.reply);
                var urls = data.reply.match(/https?:\/\/\S+\.(png|jpe?g|gif|webp)/gi) || [];
                urls.forEach(function(url) { showImage(reply, url); });
            } catch (e) {
                line('Error', e.message, 'error');
            }
        };
        text.addEventListener('keydown', function(e) {
            if (e.key === 'Enter') send.onclick();
        });
        </script>
    </body>
</html>
"#;
